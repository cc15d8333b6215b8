//! CityHash64 and its seeded variants.
//!
//! Inputs up to 64 bytes are hashed by three fixed-shape buckets. Longer
//! inputs seed 56 bytes of state (`v`, `w`, `x`, `y`, `z`) from the tail, then
//! stream 64-byte blocks from the front.

use crate::{
  bucket::Bucket64,
  load::{fetch32, fetch64},
  mix::{
    bswap64, hash_len16, hash_len16_mul,
    k64::{K0, K1, K2},
    rotate64, shift_mix, weak_hash_len32_with_seeds_at,
  },
  pair::U128,
};

#[inline(always)]
pub(crate) fn hash_len0to16(data: &[u8]) -> u64 {
  let len = data.len();
  if len >= 8 {
    let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
    let a = fetch64(data, 0).wrapping_add(K2);
    let b = fetch64(data, len - 8);
    let c = rotate64(b, 37).wrapping_mul(mul).wrapping_add(a);
    let d = rotate64(a, 25).wrapping_add(b).wrapping_mul(mul);
    return hash_len16_mul(c, d, mul);
  }
  if len >= 4 {
    let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
    let a = u64::from(fetch32(data, 0));
    return hash_len16_mul((len as u64).wrapping_add(a << 3), u64::from(fetch32(data, len - 4)), mul);
  }
  if let (Some(&a), Some(&b), Some(&c)) = (data.first(), data.get(len >> 1), data.last()) {
    let y = u32::from(a).wrapping_add(u32::from(b) << 8);
    let z = (len as u32).wrapping_add(u32::from(c) << 2);
    return shift_mix(u64::from(y).wrapping_mul(K2) ^ u64::from(z).wrapping_mul(K0)).wrapping_mul(K2);
  }
  K2
}

#[inline(always)]
fn hash_len17to32(data: &[u8]) -> u64 {
  let len = data.len();
  let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
  let a = fetch64(data, 0).wrapping_mul(K1);
  let b = fetch64(data, 8);
  let c = fetch64(data, len - 8).wrapping_mul(mul);
  let d = fetch64(data, len - 16).wrapping_mul(K2);
  hash_len16_mul(
    rotate64(a.wrapping_add(b), 43).wrapping_add(rotate64(c, 30)).wrapping_add(d),
    a.wrapping_add(rotate64(b.wrapping_add(K2), 18)).wrapping_add(c),
    mul,
  )
}

#[inline(always)]
fn hash_len33to64(data: &[u8]) -> u64 {
  let len = data.len();
  let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
  let a = fetch64(data, 0).wrapping_mul(K2);
  let b = fetch64(data, 8);
  let c = fetch64(data, len - 24);
  let d = fetch64(data, len - 32);
  let e = fetch64(data, 16).wrapping_mul(K2);
  let f = fetch64(data, 24).wrapping_mul(9);
  let g = fetch64(data, len - 8);
  let h = fetch64(data, len - 16).wrapping_mul(mul);

  let u = rotate64(a.wrapping_add(g), 43).wrapping_add(rotate64(b, 30).wrapping_add(c).wrapping_mul(9));
  let v = (a.wrapping_add(g) ^ d).wrapping_add(f).wrapping_add(1);
  let w = bswap64(u.wrapping_add(v).wrapping_mul(mul)).wrapping_add(h);
  let x = rotate64(e.wrapping_add(f), 42).wrapping_add(c);
  let y = bswap64(v.wrapping_add(w).wrapping_mul(mul)).wrapping_add(g).wrapping_mul(mul);
  let z = e.wrapping_add(f).wrapping_add(c);
  let a = bswap64(x.wrapping_add(z).wrapping_mul(mul).wrapping_add(y)).wrapping_add(b);
  let b = shift_mix(z.wrapping_add(a).wrapping_mul(mul).wrapping_add(d).wrapping_add(h)).wrapping_mul(mul);
  b.wrapping_add(x)
}

/// Rolling state of the 64-byte block loop, shared with CityHash128.
#[derive(Clone, Copy)]
pub(crate) struct State {
  pub(crate) v: U128,
  pub(crate) w: U128,
  pub(crate) x: u64,
  pub(crate) y: u64,
  pub(crate) z: u64,
}

impl State {
  /// Absorb the 64-byte block at `data[pos..pos + 64]`.
  #[inline(always)]
  pub(crate) fn absorb(&mut self, data: &[u8], pos: usize) {
    let Self { v, w, x, y, z } = self;
    *x = rotate64(x.wrapping_add(*y).wrapping_add(v.low).wrapping_add(fetch64(data, pos + 8)), 37).wrapping_mul(K1);
    *y = rotate64(y.wrapping_add(v.high).wrapping_add(fetch64(data, pos + 48)), 42).wrapping_mul(K1);
    *x ^= w.high;
    *y = y.wrapping_add(v.low).wrapping_add(fetch64(data, pos + 40));
    *z = rotate64(z.wrapping_add(w.low), 33).wrapping_mul(K1);
    *v = weak_hash_len32_with_seeds_at(data, pos, v.high.wrapping_mul(K1), x.wrapping_add(w.low));
    *w = weak_hash_len32_with_seeds_at(data, pos + 32, z.wrapping_add(w.high), y.wrapping_add(fetch64(data, pos + 16)));
    core::mem::swap(z, x);
  }
}

#[inline(never)]
fn hash64_long(data: &[u8]) -> u64 {
  let len = data.len();
  let x = fetch64(data, len - 40);
  let y = fetch64(data, len - 16).wrapping_add(fetch64(data, len - 56));
  let z = hash_len16(fetch64(data, len - 48).wrapping_add(len as u64), fetch64(data, len - 24));
  let v = weak_hash_len32_with_seeds_at(data, len - 64, len as u64, z);
  let w = weak_hash_len32_with_seeds_at(data, len - 32, y.wrapping_add(K1), x);
  let x = x.wrapping_mul(K1).wrapping_add(fetch64(data, 0));
  let mut s = State { v, w, x, y, z };

  // Whole 64-byte blocks strictly before the last byte; the final 1..=64 bytes
  // were folded in above.
  let blocks_end = (len - 1) & !63;
  let mut pos = 0usize;
  while pos < blocks_end {
    s.absorb(data, pos);
    pos += 64;
  }

  let State { v, w, x, y, z } = s;
  hash_len16(
    hash_len16(v.low, w.low).wrapping_add(shift_mix(y).wrapping_mul(K1)).wrapping_add(z),
    hash_len16(v.high, w.high).wrapping_add(x),
  )
}

/// CityHash64 of `data`.
#[inline]
#[must_use]
pub fn hash64(data: &[u8]) -> u64 {
  match Bucket64::for_len(data.len()) {
    Bucket64::Len0to16 => hash_len0to16(data),
    Bucket64::Len17to32 => hash_len17to32(data),
    Bucket64::Len33to64 => hash_len33to64(data),
    Bucket64::Long => hash64_long(data),
  }
}

/// CityHash64WithSeed: [`hash64`] folded with one 64-bit seed.
#[inline]
#[must_use]
pub fn hash64_with_seed(data: &[u8], seed: u64) -> u64 {
  hash64_with_seeds(data, K2, seed)
}

/// CityHash64WithSeeds: [`hash64`] folded with two 64-bit seeds.
#[inline]
#[must_use]
pub fn hash64_with_seeds(data: &[u8], seed0: u64, seed1: u64) -> u64 {
  hash_len16(hash64(data).wrapping_sub(seed0), seed1)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mix::hash128_to_64;

  #[test]
  fn empty_is_k2() {
    assert_eq!(hash64(b""), K2);
  }

  #[test]
  fn string_vectors() {
    assert_eq!(hash64(b"a"), 0xb345_4265_b6df_75e3);
    assert_eq!(hash64(b"abc"), 0x24a5_b3a0_74e7_f369);
    assert_eq!(hash64(b"foo bar baz"), 0x45bc_b7e9_1386_97be);
  }

  #[test]
  fn seeded_is_hash128_to_64_of_unseeded() {
    let data = b"The quick brown fox jumps over the lazy dog, twice over, and then some.";
    let seed = 0x0123_4567_89ab_cdef;
    assert_eq!(hash64_with_seed(data, seed), hash128_to_64(U128::new(hash64(data).wrapping_sub(K2), seed)));
  }

  #[test]
  fn long_loop_runs_once_at_65_and_at_128() {
    // 65 and 128 bytes both round down to a single 64-byte block.
    let data = [0x5au8; 129];
    assert_eq!(Bucket64::for_len(65), Bucket64::Long);
    assert_ne!(hash64(&data[..65]), hash64(&data[..128]));
    assert_ne!(hash64(&data[..128]), hash64(&data[..129]));
  }
}
