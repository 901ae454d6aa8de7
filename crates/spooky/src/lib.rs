//! SpookyHash: a fast 128-bit non-cryptographic hash (**NOT CRYPTO**).
//!
//! Produces a 128-bit digest (as two `u64`s) plus 64- and 32-bit truncations,
//! either in one shot over a complete buffer or incrementally over streamed
//! fragments. Both forms give identical results for the same message however it
//! is chunked.
//!
//! Roughly 4 bytes/cycle for long messages. Every 1- or 2-bit input delta
//! reaches avalanche within 1% bias per output bit. It is **not** resistant to
//! deliberately constructed collisions.
//!
//! # Quick Start
//!
//! ```
//! use spooky::{SpookyHasher, hash64, hash128};
//!
//! // One-shot
//! let (h1, h2) = hash128(b"hello world", 1, 2);
//!
//! // Streaming
//! let mut hasher = SpookyHasher::with_seeds(1, 2);
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), (h1, h2));
//!
//! // Narrower outputs are truncations of the 128-bit result
//! assert_eq!(hash64(b"hello world", 3), hash128(b"hello world", 3, 3).0);
//! ```
//!
//! # Layout
//!
//! Messages are read as little-endian 64-bit words on every target. Output
//! values are stable across platforms.
//!
//! # Feature Flags
//!
//! - `std` (default): `std::io` adapters through [`traits::StreamingHash`].
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod hasher;
mod oneshot;
mod rounds;
mod short;
mod state;
mod util;

pub use hasher::SpookyBuildHasher;
pub use oneshot::{SpookyHash32, SpookyHash64, SpookyHash128, hash32, hash64, hash128};
pub use state::{Phase, SpookyHasher};
pub use traits::{FastHash, StreamingHash};

/// Bytes consumed per long-path round.
pub const BLOCK_SIZE: usize = NUM_VARS * 8;

/// Number of 64-bit registers in the long-path state.
pub const NUM_VARS: usize = 12;

/// Seed-expansion filler and empty-tail marker: non-zero, odd, and an irregular
/// mix of ones and zeros.
pub const SC_CONST: u64 = 0xdead_beef_dead_beef;
