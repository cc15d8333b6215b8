//! CityHash128 and CityHash128WithSeed.
//!
//! Inputs shorter than 128 bytes go through a Murmur-style routine keyed by
//! the 128-bit seed. Longer inputs run the CityHash64 block loop two blocks
//! per round, then hash the remaining tail in 32-byte chunks taken from the
//! end of the input.

use crate::{
  bucket::Bucket128,
  city64::{State, hash_len0to16},
  load::fetch64,
  mix::{
    hash_len16,
    k64::{K0, K1},
    rotate64, shift_mix, weak_hash_len32_with_seeds_at,
  },
  pair::U128,
};

#[inline(always)]
fn city_murmur(data: &[u8], seed: U128) -> U128 {
  let len = data.len();
  let mut a = seed.low;
  let mut b = seed.high;
  let mut c;
  let mut d;

  if len <= 16 {
    a = shift_mix(a.wrapping_mul(K1)).wrapping_mul(K1);
    c = b.wrapping_mul(K1).wrapping_add(hash_len0to16(data));
    d = shift_mix(a.wrapping_add(if len >= 8 { fetch64(data, 0) } else { c }));
  } else {
    c = hash_len16(fetch64(data, len - 8).wrapping_add(K1), a);
    d = hash_len16(b.wrapping_add(len as u64), c.wrapping_add(fetch64(data, len - 16)));
    a = a.wrapping_add(d);

    // 16-byte chunks from the front while any of the first `len - 16` bytes
    // remain; the last chunk may overlap the tail read above.
    let mut pos = 0usize;
    while pos + 16 < len {
      a ^= shift_mix(fetch64(data, pos).wrapping_mul(K1)).wrapping_mul(K1);
      a = a.wrapping_mul(K1);
      b ^= a;
      c ^= shift_mix(fetch64(data, pos + 8).wrapping_mul(K1)).wrapping_mul(K1);
      c = c.wrapping_mul(K1);
      d ^= c;
      pos += 16;
    }
  }

  let a = hash_len16(a, c);
  let b = hash_len16(d, b);
  U128::new(a ^ b, hash_len16(b, a))
}

#[inline(never)]
fn hash128_long(data: &[u8], seed: U128) -> U128 {
  let len = data.len();
  let x = seed.low;
  let y = seed.high;
  let z = (len as u64).wrapping_mul(K1);

  let v_low = rotate64(y ^ K1, 49).wrapping_mul(K1).wrapping_add(fetch64(data, 0));
  let v = U128::new(v_low, rotate64(v_low, 42).wrapping_mul(K1).wrapping_add(fetch64(data, 8)));
  let w = U128::new(
    rotate64(y.wrapping_add(z), 35).wrapping_mul(K1).wrapping_add(x),
    rotate64(x.wrapping_add(fetch64(data, 88)), 53).wrapping_mul(K1),
  );
  let mut s = State { v, w, x, y, z };

  // Two 64-byte blocks per round while at least 128 bytes remain.
  let mut pos = 0usize;
  loop {
    s.absorb(data, pos);
    s.absorb(data, pos + 64);
    pos += 128;
    if len - pos < 128 {
      break;
    }
  }

  let State { mut v, mut w, mut x, mut y, mut z } = s;
  x = x.wrapping_add(rotate64(v.low.wrapping_add(z), 49).wrapping_mul(K0));
  y = y.wrapping_mul(K0).wrapping_add(rotate64(w.high, 37));
  z = z.wrapping_mul(K0).wrapping_add(rotate64(w.low, 27));
  w.low = w.low.wrapping_mul(9);
  v.low = v.low.wrapping_mul(K0);

  // Up to four 32-byte chunks anchored at the end of the input. With
  // `rest = len - pos` bytes left, chunk `i` (1-based) starts at
  // `len - 32 * i`, which may reach back into bytes the block loop consumed.
  let rest = len - pos;
  let mut tail_done = 0usize;
  while tail_done < rest {
    tail_done += 32;
    let chunk = len - tail_done;
    y = rotate64(x.wrapping_add(y), 42).wrapping_mul(K0).wrapping_add(v.high);
    w.low = w.low.wrapping_add(fetch64(data, chunk + 16));
    x = x.wrapping_mul(K0).wrapping_add(w.low);
    z = z.wrapping_add(w.high).wrapping_add(fetch64(data, chunk));
    w.high = w.high.wrapping_add(v.low);
    v = weak_hash_len32_with_seeds_at(data, chunk, v.low.wrapping_add(z), v.high);
    v.low = v.low.wrapping_mul(K0);
  }

  // 56 bytes of state reduced to 16 through two different 56-to-8 hashes.
  x = hash_len16(x, v.low);
  y = hash_len16(y.wrapping_add(z), w.low);
  U128::new(
    hash_len16(x.wrapping_add(v.high), w.high).wrapping_add(y),
    hash_len16(x.wrapping_add(w.high), y.wrapping_add(v.high)),
  )
}

/// CityHash128WithSeed of `data`.
#[inline]
#[must_use]
pub fn hash128_with_seed(data: &[u8], seed: U128) -> U128 {
  match Bucket128::for_len(data.len()) {
    Bucket128::MurmurLen0to16 | Bucket128::MurmurLen17to127 => city_murmur(data, seed),
    Bucket128::Long => hash128_long(data, seed),
  }
}

/// CityHash128 of `data`.
///
/// Inputs of 16 bytes or more use their first two words as the seed and hash
/// the rest; shorter inputs use the fixed seed `(K0, K1)`.
#[inline]
#[must_use]
pub fn hash128(data: &[u8]) -> U128 {
  match data.split_at_checked(16) {
    Some((head, rest)) => hash128_with_seed(rest, U128::new(fetch64(head, 0), fetch64(head, 8).wrapping_add(K0))),
    None => hash128_with_seed(data, U128::new(K0, K1)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_matches_reference() {
    assert_eq!(hash128(b""), U128::new(0x3df0_9dfc_64c0_9a2b, 0x3cb5_40c3_92e5_1e29));
  }

  #[test]
  fn sixteen_bytes_hash_an_empty_remainder() {
    let data: [u8; 16] = core::array::from_fn(|i| i as u8 * 3);
    let seed = U128::new(fetch64(&data, 0), fetch64(&data, 8).wrapping_add(K0));
    assert_eq!(hash128(&data), city_murmur(&[], seed));
  }

  #[test]
  fn tail_chunks_read_from_the_end() {
    // 160 bytes: one 128-byte round, a 32-byte tail. Flipping the last byte
    // must reach the digest through the tail pass.
    let mut data = [0u8; 160];
    for (i, b) in data.iter_mut().enumerate() {
      *b = (i * 7) as u8;
    }
    let base = hash128_with_seed(&data, U128::new(1, 2));
    data[159] ^= 0x80;
    assert_ne!(hash128_with_seed(&data, U128::new(1, 2)), base);
  }
}
