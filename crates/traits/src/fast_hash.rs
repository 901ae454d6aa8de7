//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is one-shot. Streaming is covered by
/// [`StreamingHash`](crate::StreamingHash), which implementations expose as a
/// separate concrete type.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (typically `u64` or a pair of `u64`).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using a default seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::FastHash;

  /// Byte sum, seeded by addition. Enough to exercise the default method.
  struct SumHash;

  impl FastHash for SumHash {
    const OUTPUT_SIZE: usize = 8;
    type Output = u64;
    type Seed = u64;

    fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
      data.iter().fold(seed, |acc, &b| acc.wrapping_add(u64::from(b)))
    }
  }

  #[test]
  fn hash_uses_default_seed() {
    assert_eq!(SumHash::hash(b"abc"), SumHash::hash_with_seed(0, b"abc"));
    assert_eq!(SumHash::hash_with_seed(10, b"\x01\x02"), 13);
  }
}
