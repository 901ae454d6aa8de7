//! Little-endian word assembly over bounded byte slices.

use crate::{BLOCK_SIZE, NUM_VARS};

/// Assemble the 12 little-endian words of one block.
#[inline(always)]
pub(crate) fn load_block(block: &[u8; BLOCK_SIZE]) -> [u64; NUM_VARS] {
  let (chunks, _) = block.as_chunks::<8>();
  let mut words = [0u64; NUM_VARS];
  for (word, chunk) in words.iter_mut().zip(chunks) {
    *word = u64::from_le_bytes(*chunk);
  }
  words
}

/// Assemble the 4 little-endian words of a 32-byte short-path chunk.
#[inline(always)]
pub(crate) fn load_chunk(chunk: &[u8; 32]) -> [u64; 4] {
  let (chunks, _) = chunk.as_chunks::<8>();
  let mut words = [0u64; 4];
  for (word, bytes) in words.iter_mut().zip(chunks) {
    *word = u64::from_le_bytes(*bytes);
  }
  words
}

/// Assemble up to 8 bytes into a word, missing high bytes read as zero.
#[inline(always)]
pub(crate) fn load_partial(bytes: &[u8]) -> u64 {
  debug_assert!(bytes.len() <= 8);
  let mut word = [0u8; 8];
  for (dst, src) in word.iter_mut().zip(bytes) {
    *dst = *src;
  }
  u64::from_le_bytes(word)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn block_words_are_little_endian() {
    let mut block = [0u8; BLOCK_SIZE];
    for (i, b) in block.iter_mut().enumerate() {
      *b = i as u8;
    }
    let words = load_block(&block);
    assert_eq!(words[0], 0x0706_0504_0302_0100);
    assert_eq!(words[11], 0x5f5e_5d5c_5b5a_5958);
  }

  #[test]
  fn partial_pads_high_bytes() {
    assert_eq!(load_partial(&[]), 0);
    assert_eq!(load_partial(&[0xaa]), 0xaa);
    assert_eq!(load_partial(&[1, 2, 3]), 0x03_0201);
    assert_eq!(load_partial(&[1, 2, 3, 4, 5, 6, 7, 8]), 0x0807_0605_0403_0201);
  }
}
