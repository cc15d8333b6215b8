//! Cross-checks the seeded entry points against the unseeded ones.

#![no_main]

use cityhash::{
  U128, hash32, hash64, hash64_with_seed, hash64_with_seeds, hash128, hash128_to_64, hash128_with_seed,
  load::fetch64,
  mix::{
    hash_len16,
    k64::{K0, K2},
  },
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  let (seed_bytes, data) = input.split_at(core::cmp::min(8, input.len()));
  let mut seed = 0u64;
  for (i, &b) in seed_bytes.iter().enumerate() {
    seed |= (b as u64) << (i * 8);
  }

  let h64 = hash64(data);
  assert_eq!(hash64_with_seed(data, seed), hash128_to_64(U128::new(h64.wrapping_sub(K2), seed)));
  assert_eq!(hash64_with_seeds(data, seed, !seed), hash_len16(h64.wrapping_sub(seed), !seed));

  if data.len() >= 16 {
    let derived = U128::new(fetch64(data, 0), fetch64(data, 8).wrapping_add(K0));
    assert_eq!(hash128(data), hash128_with_seed(&data[16..], derived));
  }

  assert_eq!(hash32(data), hash32(&data.to_vec()));
});
