#![allow(dead_code)]

mod input;
pub mod reference;

pub use input::gen_bytes;

/// Feed `data` to a fresh hasher in pieces of the given sizes (cycled, each
/// taken mod 257, zero allowed), then finalize.
pub fn stream_in_pieces(data: &[u8], seed: (u64, u64), sizes: &[usize]) -> (u64, u64) {
  let mut h = spooky::SpookyHasher::with_seeds(seed.0, seed.1);
  let mut offset = 0;
  let mut idx = 0;
  while offset < data.len() {
    let size = if sizes.is_empty() { 1 } else { sizes[idx % sizes.len()] % 257 };
    let end = (offset + size).min(data.len());
    h.update(&data[offset..end]);
    offset = end;
    idx += 1;
    if idx > 4 * data.len() + 16 {
      // All-zero size lists never advance; finish with the remainder.
      h.update(&data[offset..]);
      break;
    }
  }
  h.finalize()
}
