//! I/O adapters that hash bytes as they pass through.
//!
//! [`HashReader`] and [`HashWriter`] wrap any [`Read`](std::io::Read) or
//! [`Write`](std::io::Write) and feed exactly the bytes that were transferred
//! into a [`StreamingHash`](crate::StreamingHash). Short reads and short writes
//! are handled: only the prefix actually read or accepted is hashed.

use crate::StreamingHash;

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [std::io::IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

/// Wraps a [`Read`](std::io::Read) and hashes every byte read through it.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `H`: The hash algorithm type (e.g., `spooky::SpookyHasher`)
#[derive(Clone, Debug)]
pub struct HashReader<R, H: StreamingHash> {
  inner: R,
  hasher: H,
}

impl<R, H: StreamingHash> HashReader<R, H> {
  /// Create a new reader wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self::with_hasher(inner, H::new())
  }

  /// Create a new reader wrapper around an existing hasher.
  ///
  /// Bytes already consumed by `hasher` stay part of the message.
  #[inline]
  #[must_use]
  pub fn with_hasher(inner: R, hasher: H) -> Self {
    Self { inner, hasher }
  }

  /// Hash of everything read so far.
  ///
  /// Further reads continue the same message.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a reference to the underlying hasher.
  #[inline]
  pub fn hasher(&self) -> &H {
    &self.hasher
  }

  /// Unwrap, returning the inner reader and the final hash.
  #[inline]
  pub fn into_parts(self) -> (R, H::Output) {
    let hash = self.hasher.finalize();
    (self.inner, hash)
  }

  /// Unwrap, returning the inner reader and discarding the hash.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }
}

impl<R: std::io::Read, H: StreamingHash> std::io::Read for HashReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`](std::io::Write) and hashes every byte it accepts.
///
/// The hash is updated **after** the inner write returns, with exactly the
/// prefix the inner writer reported as written. A failed write hashes nothing.
#[derive(Clone, Debug)]
pub struct HashWriter<W, H: StreamingHash> {
  inner: W,
  hasher: H,
}

impl<W, H: StreamingHash> HashWriter<W, H> {
  /// Create a new writer wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self::with_hasher(inner, H::new())
  }

  /// Create a new writer wrapper around an existing hasher.
  #[inline]
  #[must_use]
  pub fn with_hasher(inner: W, hasher: H) -> Self {
    Self { inner, hasher }
  }

  /// Hash of everything written so far.
  #[inline]
  #[must_use]
  pub fn hash(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// Get a reference to the underlying hasher.
  #[inline]
  pub fn hasher(&self) -> &H {
    &self.hasher
  }

  /// Unwrap, returning the inner writer and the final hash.
  #[inline]
  pub fn into_parts(self) -> (W, H::Output) {
    let hash = self.hasher.finalize();
    (self.inner, hash)
  }

  /// Unwrap, returning the inner writer and discarding the hash.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }
}

impl<W: std::io::Write, H: StreamingHash> std::io::Write for HashWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}
