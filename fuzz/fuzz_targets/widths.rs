//! Fuzz target for output-width consistency.
//!
//! The 64- and 32-bit hashes are truncations of the 128-bit one.

#![no_main]

use libfuzzer_sys::fuzz_target;
use spooky::{FastHash, SpookyHash32, SpookyHash64, SpookyHash128, hash32, hash64, hash128};

fuzz_target!(|data: &[u8]| {
  let seed = data.len() as u64 ^ 0x9E37_79B9_7F4A_7C15;
  let (h1, h2) = hash128(data, seed, seed);

  assert_eq!(hash64(data, seed), h1);
  assert_eq!(SpookyHash64::hash_with_seed(seed, data), h1);

  let packed = SpookyHash128::hash_with_seed([seed, seed], data);
  assert_eq!(packed, u128::from(h1) | (u128::from(h2) << 64));

  let seed32 = seed as u32;
  assert_eq!(hash32(data, seed32), hash128(data, u64::from(seed32), u64::from(seed32)).0 as u32);
  assert_eq!(SpookyHash32::hash_with_seed(seed32, data), hash32(data, seed32));
});
