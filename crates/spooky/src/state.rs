//! Streaming state machine.

#![allow(clippy::indexing_slicing)] // Buffer offsets are bounded by `pending < BLOCK_SIZE`

use core::fmt;

use traits::StreamingHash;

use crate::{
  BLOCK_SIZE, NUM_VARS,
  rounds::{expand_seeds, finish_long, mix12},
  short,
  util::load_block,
};

/// Where a [`SpookyHasher`] is in its lifecycle.
///
/// Transitions only move forward: `Empty → Buffering → Long`, or straight from
/// `Empty` to `Long` when the first update is at least one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
  /// Nothing appended yet.
  Empty,
  /// Fewer than [`BLOCK_SIZE`] bytes seen; all of them sit unmixed in the
  /// buffer and finalize takes the short path.
  Buffering,
  /// At least one block has been mixed into the 12 registers.
  Long,
}

/// Incremental SpookyHash.
///
/// Feeding a message in any partition yields the same digest as
/// [`hash128`](crate::hash128) over the whole message. [`finalize`] borrows
/// `self` immutably, so the hasher stays usable after producing a digest.
///
/// Storage is fixed: one 96-byte buffer and twelve words, independent of how
/// much data passes through.
///
/// # Example
///
/// ```
/// use spooky::{SpookyHasher, hash128};
///
/// let mut h = SpookyHasher::with_seeds(1, 2);
/// h.update(b"hello ");
/// h.update(b"world");
/// assert_eq!(h.finalize(), hash128(b"hello world", 1, 2));
/// ```
///
/// [`finalize`]: SpookyHasher::finalize
#[derive(Clone)]
pub struct SpookyHasher {
  registers: [u64; NUM_VARS],
  buffer: [u8; BLOCK_SIZE],
  total_len: u64,
  pending: usize,
  seed: [u64; 2],
  phase: Phase,
}

impl SpookyHasher {
  /// Create a hasher keyed with two 64-bit seeds.
  #[inline]
  #[must_use]
  pub const fn with_seeds(seed1: u64, seed2: u64) -> Self {
    Self {
      registers: [0; NUM_VARS],
      buffer: [0; BLOCK_SIZE],
      total_len: 0,
      pending: 0,
      seed: [seed1, seed2],
      phase: Phase::Empty,
    }
  }

  /// Create a hasher with both seeds zero.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self::with_seeds(0, 0)
  }

  /// The seeds this hasher was created with.
  #[inline]
  #[must_use]
  pub const fn seeds(&self) -> (u64, u64) {
    (self.seed[0], self.seed[1])
  }

  /// Current lifecycle phase.
  #[inline]
  #[must_use]
  pub const fn phase(&self) -> Phase {
    self.phase
  }

  /// Total bytes consumed so far (wrapping at 2^64).
  #[inline]
  #[must_use]
  pub const fn len(&self) -> u64 {
    self.total_len
  }

  /// Whether no bytes have been consumed.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    matches!(self.phase, Phase::Empty)
  }

  /// Append `data` to the message.
  ///
  /// Zero-length input leaves the state unchanged. Until a full block has
  /// accumulated nothing is mixed: the short path at finalize needs the raw
  /// bytes.
  pub fn update(&mut self, data: &[u8]) {
    let pending = self.pending;

    if data.len() < BLOCK_SIZE - pending {
      self.buffer[pending..pending + data.len()].copy_from_slice(data);
      self.pending += data.len();
      self.total_len = self.total_len.wrapping_add(data.len() as u64);
      if self.phase == Phase::Empty && !data.is_empty() {
        self.phase = Phase::Buffering;
      }
      return;
    }

    let mut h = match self.phase {
      Phase::Long => self.registers,
      Phase::Empty | Phase::Buffering => expand_seeds(self.seed[0], self.seed[1]),
    };
    self.total_len = self.total_len.wrapping_add(data.len() as u64);

    let mut rest = data;
    if pending > 0 {
      let (head, tail) = rest.split_at(BLOCK_SIZE - pending);
      self.buffer[pending..].copy_from_slice(head);
      mix12(&mut h, &load_block(&self.buffer));
      rest = tail;
    }

    let (blocks, tail) = rest.as_chunks::<BLOCK_SIZE>();
    for block in blocks {
      mix12(&mut h, &load_block(block));
    }

    self.buffer[..tail.len()].copy_from_slice(tail);
    self.pending = tail.len();
    self.registers = h;
    self.phase = Phase::Long;
  }

  /// The 128-bit digest of everything appended so far, as `(h1, h2)`.
  ///
  /// Does not modify the hasher: calling it twice returns the same value, and
  /// further updates extend the same message.
  #[must_use]
  pub fn finalize(&self) -> (u64, u64) {
    match self.phase {
      Phase::Empty | Phase::Buffering => short::hash(&self.buffer[..self.pending], self.seed[0], self.seed[1]),
      Phase::Long => finish_long(self.registers, &last_block(&self.buffer[..self.pending], self.total_len)),
    }
  }

  /// The digest as a `u128` with `h1` in the low 64 bits.
  #[inline]
  #[must_use]
  pub fn finalize_u128(&self) -> u128 {
    let (h1, h2) = self.finalize();
    u128::from(h1) | (u128::from(h2) << 64)
  }

  /// The digest as 16 bytes: `h1` then `h2`, each little-endian.
  #[inline]
  #[must_use]
  pub fn finalize_bytes(&self) -> [u8; 16] {
    self.finalize_u128().to_le_bytes()
  }

  /// Forget all input, keeping the seeds.
  #[inline]
  pub fn reset(&mut self) {
    *self = Self::with_seeds(self.seed[0], self.seed[1]);
  }
}

/// Zero-pad the unmixed tail to a full block and tag its last byte with the
/// message length mod 256.
#[inline(always)]
pub(crate) fn last_block(tail: &[u8], total_len: u64) -> [u64; NUM_VARS] {
  debug_assert!(tail.len() < BLOCK_SIZE);
  let mut block = [0u8; BLOCK_SIZE];
  block[..tail.len()].copy_from_slice(tail);
  block[BLOCK_SIZE - 1] = total_len as u8;
  load_block(&block)
}

impl Default for SpookyHasher {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for SpookyHasher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SpookyHasher")
      .field("phase", &self.phase)
      .field("len", &self.total_len)
      .field("pending", &self.pending)
      .finish_non_exhaustive()
  }
}

impl StreamingHash for SpookyHasher {
  const OUTPUT_SIZE: usize = 16;
  type Output = (u64, u64);
  type Seed = [u64; 2];

  #[inline]
  fn with_seed(seed: Self::Seed) -> Self {
    Self::with_seeds(seed[0], seed[1])
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    SpookyHasher::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    SpookyHasher::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    SpookyHasher::reset(self);
  }
}
