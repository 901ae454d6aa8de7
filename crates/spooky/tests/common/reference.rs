//! Straight-line reference SpookyHash for differential tests.
//!
//! Written from the round descriptions with index arithmetic and a
//! byte-by-byte tail switch, sharing no code with the crate.

const BLOCK: usize = 96;
const CONST: u64 = 0xdead_beef_dead_beef;

const MIX_ROT: [u32; 12] = [32, 41, 12, 24, 8, 42, 32, 13, 30, 20, 47, 16];
const END_ROT: [u32; 12] = [29, 52, 31, 43, 56, 34, 21, 17, 44, 38, 50, 50];
const SHORT_MIX_ROT: [u32; 12] = [50, 52, 30, 41, 54, 48, 38, 37, 62, 34, 5, 36];
const SHORT_END_ROT: [u32; 11] = [15, 52, 26, 51, 28, 9, 47, 54, 32, 25, 63];

fn word(bytes: &[u8], at: usize) -> u64 {
  let mut v = 0u64;
  for i in (0..8).rev() {
    v = (v << 8) | u64::from(bytes[at + i]);
  }
  v
}

fn half_word(bytes: &[u8], at: usize) -> u64 {
  let mut v = 0u64;
  for i in (0..4).rev() {
    v = (v << 8) | u64::from(bytes[at + i]);
  }
  v
}

fn mix(h: &mut [u64; 12], block: &[u8]) {
  for i in 0..12 {
    let at = |k: usize| (i + k) % 12;
    h[i] = h[i].wrapping_add(word(block, 8 * i));
    h[at(11)] = h[at(11)].rotate_left(MIX_ROT[i]);
    h[at(9)] ^= h[at(1)];
    h[at(11)] = h[at(11)].wrapping_add(h[at(10)]);
    h[at(1)] = h[at(1)].wrapping_add(h[at(10)]);
  }
}

fn end(h: &mut [u64; 12]) {
  for _ in 0..2 {
    for i in 0..12 {
      let at = |k: usize| (i + k) % 12;
      h[i] = h[i].rotate_left(END_ROT[i]);
      h[at(2)] ^= h[at(11)];
      h[i] = h[i].wrapping_add(h[at(2)]);
    }
  }
}

fn short_mix(h: &mut [u64; 4]) {
  for (j, &r) in SHORT_MIX_ROT.iter().enumerate() {
    let k = (j + 2) % 4;
    h[k] = h[k].rotate_left(r);
    h[k] = h[k].wrapping_add(h[(k + 1) % 4]);
    h[(k + 2) % 4] ^= h[k];
  }
}

fn short_end(h: &mut [u64; 4]) {
  for (j, &r) in SHORT_END_ROT.iter().enumerate() {
    let k = (j + 3) % 4;
    let m = (k + 3) % 4;
    h[k] ^= h[m];
    h[m] = h[m].rotate_left(r);
    h[k] = h[k].wrapping_add(h[m]);
  }
}

/// Short path over any message (callers use it for `len < 96`).
pub fn short_hash(msg: &[u8], seed1: u64, seed2: u64) -> (u64, u64) {
  let (mut a, mut b, mut c, mut d) = (seed1, seed2, 0u64, 0u64);
  let len = msg.len();
  let mut p = 0usize;
  let mut remainder = len % 32;

  if len > 15 {
    while p + 32 <= len {
      c = c.wrapping_add(word(msg, p));
      d = d.wrapping_add(word(msg, p + 8));
      let mut s = [a, b, c, d];
      short_mix(&mut s);
      [a, b, c, d] = s;
      a = a.wrapping_add(word(msg, p + 16));
      b = b.wrapping_add(word(msg, p + 24));
      p += 32;
    }
    if remainder >= 16 {
      c = c.wrapping_add(word(msg, p));
      d = d.wrapping_add(word(msg, p + 8));
      let mut s = [a, b, c, d];
      short_mix(&mut s);
      [a, b, c, d] = s;
      p += 16;
      remainder -= 16;
    }
  }

  let t = &msg[p..];
  d = (len as u64) << 56;
  let byte = |i: usize, shift: u32| u64::from(t[i]) << shift;
  match remainder {
    15 => {
      d = d.wrapping_add(byte(14, 48)).wrapping_add(byte(13, 40)).wrapping_add(byte(12, 32));
      d = d.wrapping_add(half_word(t, 8));
      c = c.wrapping_add(word(t, 0));
    }
    14 => {
      d = d.wrapping_add(byte(13, 40)).wrapping_add(byte(12, 32));
      d = d.wrapping_add(half_word(t, 8));
      c = c.wrapping_add(word(t, 0));
    }
    13 => {
      d = d.wrapping_add(byte(12, 32));
      d = d.wrapping_add(half_word(t, 8));
      c = c.wrapping_add(word(t, 0));
    }
    12 => {
      d = d.wrapping_add(half_word(t, 8));
      c = c.wrapping_add(word(t, 0));
    }
    11 => {
      d = d.wrapping_add(byte(10, 16)).wrapping_add(byte(9, 8)).wrapping_add(byte(8, 0));
      c = c.wrapping_add(word(t, 0));
    }
    10 => {
      d = d.wrapping_add(byte(9, 8)).wrapping_add(byte(8, 0));
      c = c.wrapping_add(word(t, 0));
    }
    9 => {
      d = d.wrapping_add(byte(8, 0));
      c = c.wrapping_add(word(t, 0));
    }
    8 => {
      c = c.wrapping_add(word(t, 0));
    }
    7 => {
      c = c.wrapping_add(byte(6, 48)).wrapping_add(byte(5, 40)).wrapping_add(byte(4, 32));
      c = c.wrapping_add(half_word(t, 0));
    }
    6 => {
      c = c.wrapping_add(byte(5, 40)).wrapping_add(byte(4, 32));
      c = c.wrapping_add(half_word(t, 0));
    }
    5 => {
      c = c.wrapping_add(byte(4, 32));
      c = c.wrapping_add(half_word(t, 0));
    }
    4 => {
      c = c.wrapping_add(half_word(t, 0));
    }
    3 => {
      c = c.wrapping_add(byte(2, 16)).wrapping_add(byte(1, 8)).wrapping_add(byte(0, 0));
    }
    2 => {
      c = c.wrapping_add(byte(1, 8)).wrapping_add(byte(0, 0));
    }
    1 => {
      c = c.wrapping_add(byte(0, 0));
    }
    0 => {
      c = c.wrapping_add(CONST);
      d = d.wrapping_add(CONST);
    }
    _ => unreachable!("remainder is below 16"),
  }

  let mut s = [a, b, c, d];
  short_end(&mut s);
  (s[0], s[1])
}

pub fn hash128(msg: &[u8], seed1: u64, seed2: u64) -> (u64, u64) {
  if msg.len() < BLOCK {
    return short_hash(msg, seed1, seed2);
  }

  let mut h = [0u64; 12];
  for (i, reg) in h.iter_mut().enumerate() {
    *reg = match i % 3 {
      0 => seed1,
      1 => seed2,
      _ => CONST,
    };
  }

  let whole = msg.len() / BLOCK * BLOCK;
  for start in (0..whole).step_by(BLOCK) {
    mix(&mut h, &msg[start..start + BLOCK]);
  }

  let mut last = [0u8; BLOCK];
  let rest = &msg[whole..];
  last[..rest.len()].copy_from_slice(rest);
  last[BLOCK - 1] = (msg.len() % 256) as u8;
  mix(&mut h, &last);
  end(&mut h);
  (h[0], h[1])
}
