//! Core hash traits for the spooky workspace.
//!
//! This crate provides the traits hash implementations conform to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot seeded non-cryptographic hashing | SpookyHash 128/64/32 |
//! | [`StreamingHash`] | Incremental seeded hashing | `SpookyHasher` |
//!
//! # Feature Flags
//!
//! - `std` (default): `std::io` adapters ([`io::HashReader`], [`io::HashWriter`])
//!   and [`StreamingHash::update_io_slices`].
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

mod fast_hash;
#[cfg(feature = "std")]
pub mod io;
mod streaming;

pub use fast_hash::FastHash;
pub use streaming::StreamingHash;
