//! One-shot hashing and [`FastHash`] integration.

use traits::FastHash;

use crate::{
  BLOCK_SIZE,
  rounds::{expand_seeds, finish_long, mix12},
  short,
  state::last_block,
  util::load_block,
};

/// 128-bit SpookyHash of `data`, returned as `(h1, h2)`.
///
/// Messages shorter than one block take the 4-register short path; longer ones
/// are mixed block by block straight out of `data` and finished with the
/// zero-padded, length-tagged trailing block (which always exists, even when
/// it is pure padding).
///
/// ```
/// let (h1, h2) = spooky::hash128(b"", 0, 0);
/// assert_eq!((h1, h2), spooky::SpookyHasher::new().finalize());
/// ```
#[inline]
#[must_use]
pub fn hash128(data: &[u8], seed1: u64, seed2: u64) -> (u64, u64) {
  if data.len() < BLOCK_SIZE {
    return short::hash(data, seed1, seed2);
  }

  let mut h = expand_seeds(seed1, seed2);
  let (blocks, tail) = data.as_chunks::<BLOCK_SIZE>();
  for block in blocks {
    mix12(&mut h, &load_block(block));
  }

  finish_long(h, &last_block(tail, data.len() as u64))
}

/// 64-bit SpookyHash: `h1` of [`hash128`] with both seeds set to `seed`.
#[inline]
#[must_use]
pub fn hash64(data: &[u8], seed: u64) -> u64 {
  hash128(data, seed, seed).0
}

/// 32-bit SpookyHash: low 32 bits of [`hash64`] with the seed widened.
#[inline]
#[must_use]
pub fn hash32(data: &[u8], seed: u32) -> u32 {
  hash64(data, u64::from(seed)) as u32
}

/// SpookyHash, 128-bit output (**NOT CRYPTO**).
///
/// The output packs `h1` into the low 64 bits and `h2` into the high 64 bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpookyHash128;

/// SpookyHash, 64-bit output (**NOT CRYPTO**).
#[derive(Clone, Copy, Debug, Default)]
pub struct SpookyHash64;

/// SpookyHash, 32-bit output (**NOT CRYPTO**).
#[derive(Clone, Copy, Debug, Default)]
pub struct SpookyHash32;

impl FastHash for SpookyHash128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = u128;
  type Seed = [u64; 2];

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    let [seed1, seed2] = seed;
    let (h1, h2) = hash128(data, seed1, seed2);
    u128::from(h1) | (u128::from(h2) << 64)
  }
}

impl FastHash for SpookyHash64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash64(data, seed)
  }
}

impl FastHash for SpookyHash32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash32(data, seed)
  }
}
