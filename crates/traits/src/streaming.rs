//! Seeded streaming hash trait.
//!
//! Shaped for incremental non-cryptographic hashes: seeded construction,
//! streaming updates, idempotent finalize, and reset support.

use core::fmt::Debug;

/// Seeded hash that can consume its input in fragments.
///
/// # Implementor Requirements
///
/// - `new()` must equal `with_seed(Seed::default())`
/// - Any partition of a message fed through [`update`](Self::update) must
///   finalize to the same value as the whole message fed at once
/// - `finalize()` must not change the hasher: calling it twice returns the same
///   value, and later updates continue the same message
/// - `reset()` must restore the state produced by `with_seed` for the seed the
///   hasher was created with
pub trait StreamingHash: Clone {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The hash output type.
  type Output: Copy + Eq + Debug;

  /// Seed type.
  type Seed: Copy + Debug + Default;

  /// Create a hasher keyed with `seed`.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// Create a hasher keyed with the default seed.
  #[inline]
  #[must_use]
  fn new() -> Self {
    Self::with_seed(Self::Seed::default())
  }

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Compute the hash of everything consumed so far.
  ///
  /// This method does not consume or modify the hasher.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its freshly seeded state.
  fn reset(&mut self);

  /// Hash multiple buffers as one logical message.
  #[inline]
  #[must_use]
  fn hash_vectored(seed: Self::Seed, bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::with_seed(seed);
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to hash bytes transparently as they are read.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::StreamingHash;
  /// # #[derive(Clone, Default)]
  /// # struct Sum(u64, u64);
  /// # impl StreamingHash for Sum {
  /// #   const OUTPUT_SIZE: usize = 8;
  /// #   type Output = u64;
  /// #   type Seed = u64;
  /// #   fn with_seed(seed: u64) -> Self { Self(seed, seed) }
  /// #   fn update(&mut self, data: &[u8]) {
  /// #     self.1 = data.iter().fold(self.1, |acc, &b| acc.wrapping_add(u64::from(b)));
  /// #   }
  /// #   fn finalize(&self) -> u64 { self.1 }
  /// #   fn reset(&mut self) { self.1 = self.0; }
  /// # }
  /// # use std::io::Cursor;
  /// let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// assert_eq!(reader.hash(), 97 + 98 + 99);
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::HashReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::HashReader::new(inner)
  }

  /// Wrap a writer to hash bytes transparently as they are written.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::StreamingHash;
  /// # #[derive(Clone, Default)]
  /// # struct Sum(u64, u64);
  /// # impl StreamingHash for Sum {
  /// #   const OUTPUT_SIZE: usize = 8;
  /// #   type Output = u64;
  /// #   type Seed = u64;
  /// #   fn with_seed(seed: u64) -> Self { Self(seed, seed) }
  /// #   fn update(&mut self, data: &[u8]) {
  /// #     self.1 = data.iter().fold(self.1, |acc, &b| acc.wrapping_add(u64::from(b)));
  /// #   }
  /// #   fn finalize(&self) -> u64 { self.1 }
  /// #   fn reset(&mut self) { self.1 = self.0; }
  /// # }
  /// # use std::io::Write;
  /// let mut writer = Sum::writer(Vec::new());
  /// writer.write_all(b"hi")?;
  /// let (out, hash) = writer.into_parts();
  /// assert_eq!(out, b"hi".to_vec());
  /// assert_eq!(hash, 104 + 105);
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::HashWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::HashWriter::new(inner)
  }
}
