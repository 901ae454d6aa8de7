//! `core::hash` integration.
//!
//! Lets SpookyHash back `HashMap`/`HashSet`:
//!
//! ```
//! use std::collections::HashMap;
//!
//! use spooky::SpookyBuildHasher;
//!
//! let mut map: HashMap<&str, u32, SpookyBuildHasher> = HashMap::with_hasher(SpookyBuildHasher::with_seeds(7, 8));
//! map.insert("spooky", 1);
//! assert_eq!(map.get("spooky"), Some(&1));
//! ```

use core::hash::{BuildHasher, Hasher};

use crate::SpookyHasher;

impl Hasher for SpookyHasher {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.update(bytes);
  }

  /// `h1` of the 128-bit digest.
  #[inline]
  fn finish(&self) -> u64 {
    self.finalize().0
  }
}

/// [`BuildHasher`] producing [`SpookyHasher`]s keyed with fixed seeds.
///
/// The default is seeds `(0, 0)`. Pick random seeds per table when keys may be
/// chosen by someone else: SpookyHash is not collision resistant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpookyBuildHasher {
  seed1: u64,
  seed2: u64,
}

impl SpookyBuildHasher {
  /// Build hashers keyed with `seed1` and `seed2`.
  #[inline]
  #[must_use]
  pub const fn with_seeds(seed1: u64, seed2: u64) -> Self {
    Self { seed1, seed2 }
  }
}

impl BuildHasher for SpookyBuildHasher {
  type Hasher = SpookyHasher;

  #[inline]
  fn build_hasher(&self) -> SpookyHasher {
    SpookyHasher::with_seeds(self.seed1, self.seed2)
  }
}
