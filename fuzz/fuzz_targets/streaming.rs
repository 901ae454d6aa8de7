//! Fuzz target for the streaming API.
//!
//! Arbitrary sequences of update calls must match the one-shot digest, and
//! finalizing mid-stream must not disturb the running state.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spooky::{SpookyHasher, hash128};

#[derive(Arbitrary, Debug)]
struct Input {
  seed1: u64,
  seed2: u64,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates; zero means an empty update.
  chunk_sizes: Vec<u16>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = hash128(data, input.seed1, input.seed2);

  let mut hasher = SpookyHasher::with_seeds(input.seed1, input.seed2);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      usize::from(input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 300)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    assert_eq!(hasher.finalize(), hash128(&data[..end], input.seed1, input.seed2));
    offset = end;
    chunk_idx += 1;

    if chunk_idx > 4 * data.len() + 16 {
      hasher.update(&data[offset..]);
      break;
    }
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch, len={}", data.len());
  assert_eq!(hasher.len(), data.len() as u64);
});
