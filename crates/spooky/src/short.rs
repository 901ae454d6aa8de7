//! Short-message path (messages under one block).
//!
//! Filling twelve registers costs the same regardless of message length, so
//! inputs shorter than [`BLOCK_SIZE`](crate::BLOCK_SIZE) go through a 4-word
//! state instead: 32-byte chunks, an optional 16-byte half chunk, then a
//! length-tagged tail of 0..=15 bytes.

#![allow(clippy::indexing_slicing)] // Fixed-size register array

use crate::{
  SC_CONST,
  rounds::{short_end4, short_mix4},
  util::{load_chunk, load_partial},
};

const CHUNK: usize = 32;
const HALF: usize = 16;

/// Hash `data` with the short path.
///
/// Defined for any length; the long path only delegates here for messages
/// under one block, and the length tag keeps only `len mod 256`.
#[inline]
pub(crate) fn hash(data: &[u8], seed1: u64, seed2: u64) -> (u64, u64) {
  let mut h = [seed1, seed2, 0, 0];

  let (chunks, rest) = data.as_chunks::<CHUNK>();
  for chunk in chunks {
    let [w0, w1, w2, w3] = load_chunk(chunk);
    h[2] = h[2].wrapping_add(w0);
    h[3] = h[3].wrapping_add(w1);
    short_mix4(&mut h);
    h[0] = h[0].wrapping_add(w2);
    h[1] = h[1].wrapping_add(w3);
  }

  let tail = match rest.split_first_chunk::<HALF>() {
    Some((half, tail)) => {
      let (lo, hi) = half.split_at(8);
      h[2] = h[2].wrapping_add(load_partial(lo));
      h[3] = h[3].wrapping_add(load_partial(hi));
      short_mix4(&mut h);
      tail
    }
    None => rest,
  };

  // The length replaces `d` outright; only its low byte survives the shift.
  h[3] = (data.len() as u64) << 56;
  if tail.is_empty() {
    h[2] = h[2].wrapping_add(SC_CONST);
    h[3] = h[3].wrapping_add(SC_CONST);
  } else {
    let (lo, hi) = tail.split_at(tail.len().min(8));
    h[2] = h[2].wrapping_add(load_partial(lo));
    h[3] = h[3].wrapping_add(load_partial(hi));
  }

  short_end4(&mut h);
  (h[0], h[1])
}
