//! Mixing rounds.
//!
//! Two families: a 12-word round and finisher for the long path (one call per
//! 96-byte block), and a cheaper 4-word round and finisher for messages shorter
//! than one block. Every addition wraps mod 2^64.

#![allow(clippy::indexing_slicing)] // Fixed-size register arrays, constant indices

use crate::{NUM_VARS, SC_CONST};

/// Expand two seeds into the 12 long-path registers.
///
/// `(h0, h3, h6, h9) = seed1`, `(h1, h4, h7, h10) = seed2`, the remaining four
/// registers hold [`SC_CONST`].
#[inline(always)]
pub(crate) const fn expand_seeds(seed1: u64, seed2: u64) -> [u64; NUM_VARS] {
  [
    seed1, seed2, SC_CONST, seed1, seed2, SC_CONST, seed1, seed2, SC_CONST, seed1, seed2, SC_CONST,
  ]
}

/// Fold one block of 12 words into the long-path registers.
///
/// The whole state is overwritten every block. Each input bit reaches at least
/// 128 bits of state before the next 96 bytes are combined, run forward or
/// backward.
#[rustfmt::skip]
#[inline(always)]
pub(crate) fn mix12(h: &mut [u64; NUM_VARS], d: &[u64; NUM_VARS]) {
  h[0]  = h[0].wrapping_add(d[0]);     h[11] = h[11].rotate_left(32);  h[9]  ^= h[1];   h[11] = h[11].wrapping_add(h[10]);  h[1]  = h[1].wrapping_add(h[10]);
  h[1]  = h[1].wrapping_add(d[1]);     h[0]  = h[0].rotate_left(41);   h[10] ^= h[2];   h[0]  = h[0].wrapping_add(h[11]);   h[2]  = h[2].wrapping_add(h[11]);
  h[2]  = h[2].wrapping_add(d[2]);     h[1]  = h[1].rotate_left(12);   h[11] ^= h[3];   h[1]  = h[1].wrapping_add(h[0]);    h[3]  = h[3].wrapping_add(h[0]);
  h[3]  = h[3].wrapping_add(d[3]);     h[2]  = h[2].rotate_left(24);   h[0]  ^= h[4];   h[2]  = h[2].wrapping_add(h[1]);    h[4]  = h[4].wrapping_add(h[1]);
  h[4]  = h[4].wrapping_add(d[4]);     h[3]  = h[3].rotate_left(8);    h[1]  ^= h[5];   h[3]  = h[3].wrapping_add(h[2]);    h[5]  = h[5].wrapping_add(h[2]);
  h[5]  = h[5].wrapping_add(d[5]);     h[4]  = h[4].rotate_left(42);   h[2]  ^= h[6];   h[4]  = h[4].wrapping_add(h[3]);    h[6]  = h[6].wrapping_add(h[3]);
  h[6]  = h[6].wrapping_add(d[6]);     h[5]  = h[5].rotate_left(32);   h[3]  ^= h[7];   h[5]  = h[5].wrapping_add(h[4]);    h[7]  = h[7].wrapping_add(h[4]);
  h[7]  = h[7].wrapping_add(d[7]);     h[6]  = h[6].rotate_left(13);   h[4]  ^= h[8];   h[6]  = h[6].wrapping_add(h[5]);    h[8]  = h[8].wrapping_add(h[5]);
  h[8]  = h[8].wrapping_add(d[8]);     h[7]  = h[7].rotate_left(30);   h[5]  ^= h[9];   h[7]  = h[7].wrapping_add(h[6]);    h[9]  = h[9].wrapping_add(h[6]);
  h[9]  = h[9].wrapping_add(d[9]);     h[8]  = h[8].rotate_left(20);   h[6]  ^= h[10];  h[8]  = h[8].wrapping_add(h[7]);    h[10] = h[10].wrapping_add(h[7]);
  h[10] = h[10].wrapping_add(d[10]);   h[9]  = h[9].rotate_left(47);   h[7]  ^= h[11];  h[9]  = h[9].wrapping_add(h[8]);    h[11] = h[11].wrapping_add(h[8]);
  h[11] = h[11].wrapping_add(d[11]);   h[10] = h[10].rotate_left(16);  h[8]  ^= h[0];   h[10] = h[10].wrapping_add(h[9]);   h[0]  = h[0].wrapping_add(h[9]);
}

/// One pass of the long-path finisher. Finalization runs it twice.
///
/// Does not rely on a preceding [`mix12`] having diffused anything: after two
/// passes every bit of `h0`/`h1` flips with probability 50 ± 0.3% for any
/// single input-bit change.
#[rustfmt::skip]
#[inline(always)]
pub(crate) fn end12(h: &mut [u64; NUM_VARS]) {
  h[0]  = h[0].rotate_left(29);    h[2]  ^= h[11];  h[0]  = h[0].wrapping_add(h[2]);
  h[1]  = h[1].rotate_left(52);    h[3]  ^= h[0];   h[1]  = h[1].wrapping_add(h[3]);
  h[2]  = h[2].rotate_left(31);    h[4]  ^= h[1];   h[2]  = h[2].wrapping_add(h[4]);
  h[3]  = h[3].rotate_left(43);    h[5]  ^= h[2];   h[3]  = h[3].wrapping_add(h[5]);
  h[4]  = h[4].rotate_left(56);    h[6]  ^= h[3];   h[4]  = h[4].wrapping_add(h[6]);
  h[5]  = h[5].rotate_left(34);    h[7]  ^= h[4];   h[5]  = h[5].wrapping_add(h[7]);
  h[6]  = h[6].rotate_left(21);    h[8]  ^= h[5];   h[6]  = h[6].wrapping_add(h[8]);
  h[7]  = h[7].rotate_left(17);    h[9]  ^= h[6];   h[7]  = h[7].wrapping_add(h[9]);
  h[8]  = h[8].rotate_left(44);    h[10] ^= h[7];   h[8]  = h[8].wrapping_add(h[10]);
  h[9]  = h[9].rotate_left(38);    h[11] ^= h[8];   h[9]  = h[9].wrapping_add(h[11]);
  h[10] = h[10].rotate_left(50);   h[0]  ^= h[9];   h[10] = h[10].wrapping_add(h[0]);
  h[11] = h[11].rotate_left(50);   h[1]  ^= h[10];  h[11] = h[11].wrapping_add(h[1]);
}

/// Mix the last (zero-padded, length-tagged) block and finish.
///
/// Shared by streaming finalize and the one-shot path; `h` is a copy, so the
/// caller's retained registers are untouched.
#[inline(always)]
pub(crate) fn finish_long(mut h: [u64; NUM_VARS], last: &[u64; NUM_VARS]) -> (u64, u64) {
  mix12(&mut h, last);
  end12(&mut h);
  end12(&mut h);
  (h[0], h[1])
}

/// 4-word round for the short path.
#[rustfmt::skip]
#[inline(always)]
pub(crate) fn short_mix4(h: &mut [u64; 4]) {
  h[2] = h[2].rotate_left(50); h[2] = h[2].wrapping_add(h[3]); h[0] ^= h[2];
  h[3] = h[3].rotate_left(52); h[3] = h[3].wrapping_add(h[0]); h[1] ^= h[3];
  h[0] = h[0].rotate_left(30); h[0] = h[0].wrapping_add(h[1]); h[2] ^= h[0];
  h[1] = h[1].rotate_left(41); h[1] = h[1].wrapping_add(h[2]); h[3] ^= h[1];
  h[2] = h[2].rotate_left(54); h[2] = h[2].wrapping_add(h[3]); h[0] ^= h[2];
  h[3] = h[3].rotate_left(48); h[3] = h[3].wrapping_add(h[0]); h[1] ^= h[3];
  h[0] = h[0].rotate_left(38); h[0] = h[0].wrapping_add(h[1]); h[2] ^= h[0];
  h[1] = h[1].rotate_left(37); h[1] = h[1].wrapping_add(h[2]); h[3] ^= h[1];
  h[2] = h[2].rotate_left(62); h[2] = h[2].wrapping_add(h[3]); h[0] ^= h[2];
  h[3] = h[3].rotate_left(34); h[3] = h[3].wrapping_add(h[0]); h[1] ^= h[3];
  h[0] = h[0].rotate_left(5);  h[0] = h[0].wrapping_add(h[1]); h[2] ^= h[0];
  h[1] = h[1].rotate_left(36); h[1] = h[1].wrapping_add(h[2]); h[3] ^= h[1];
}

/// 4-word finisher for the short path.
#[rustfmt::skip]
#[inline(always)]
pub(crate) fn short_end4(h: &mut [u64; 4]) {
  h[3] ^= h[2]; h[2] = h[2].rotate_left(15);  h[3] = h[3].wrapping_add(h[2]);
  h[0] ^= h[3]; h[3] = h[3].rotate_left(52);  h[0] = h[0].wrapping_add(h[3]);
  h[1] ^= h[0]; h[0] = h[0].rotate_left(26);  h[1] = h[1].wrapping_add(h[0]);
  h[2] ^= h[1]; h[1] = h[1].rotate_left(51);  h[2] = h[2].wrapping_add(h[1]);
  h[3] ^= h[2]; h[2] = h[2].rotate_left(28);  h[3] = h[3].wrapping_add(h[2]);
  h[0] ^= h[3]; h[3] = h[3].rotate_left(9);   h[0] = h[0].wrapping_add(h[3]);
  h[1] ^= h[0]; h[0] = h[0].rotate_left(47);  h[1] = h[1].wrapping_add(h[0]);
  h[2] ^= h[1]; h[1] = h[1].rotate_left(54);  h[2] = h[2].wrapping_add(h[1]);
  h[3] ^= h[2]; h[2] = h[2].rotate_left(32);  h[3] = h[3].wrapping_add(h[2]);
  h[0] ^= h[3]; h[3] = h[3].rotate_left(25);  h[0] = h[0].wrapping_add(h[3]);
  h[1] ^= h[0]; h[0] = h[0].rotate_left(63);  h[1] = h[1].wrapping_add(h[0]);
}
