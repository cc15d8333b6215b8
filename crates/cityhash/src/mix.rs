//! Mixing primitives shared by every CityHash bucket.
//!
//! The order of operations in each routine is part of the algorithm
//! definition: reordering two wrapping steps changes the digest without any
//! visible failure.
//!
//! The 32-bit family ([`c32`]) and the 64/128-bit family ([`k64`]) use
//! disjoint constant tables; a routine of one family never reads the other's.

use crate::pair::U128;

/// Murmur3-derived constants of the 32-bit family.
pub mod c32 {
  pub const C1: u32 = 0xcc9e_2d51;
  pub const C2: u32 = 0x1b87_3593;
  /// Additive constant of the Murmur3 body step.
  pub const N: u32 = 0xe654_6b64;
}

/// Primes between 2^63 and 2^64 used by the 64- and 128-bit families.
pub mod k64 {
  pub const K0: u64 = 0xc3a5_c85c_97cb_3127;
  pub const K1: u64 = 0xb492_b66f_be98_f273;
  pub const K2: u64 = 0x9ae1_6a3b_2f90_404f;
  /// Multiplier of [`super::hash128_to_64`].
  pub const KMUL: u64 = 0x9ddf_ea08_eb38_2d69;
}

use self::{c32::*, k64::KMUL};

/// Right rotation. A shift of zero is the identity.
#[inline(always)]
#[must_use]
pub const fn rotate32(val: u32, shift: u32) -> u32 {
  val.rotate_right(shift)
}

/// Right rotation. A shift of zero is the identity.
#[inline(always)]
#[must_use]
pub const fn rotate64(val: u64, shift: u32) -> u64 {
  val.rotate_right(shift)
}

#[inline(always)]
#[must_use]
pub const fn bswap32(x: u32) -> u32 {
  x.swap_bytes()
}

#[inline(always)]
#[must_use]
pub const fn bswap64(x: u64) -> u64 {
  x.swap_bytes()
}

#[inline(always)]
#[must_use]
pub const fn shift_mix(val: u64) -> u64 {
  val ^ (val >> 47)
}

/// Murmur3 32-bit finalizer.
#[inline(always)]
#[must_use]
pub const fn fmix(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

/// One Murmur3 body step: scramble `a`, fold it into `h`.
#[inline(always)]
#[must_use]
pub const fn mur(mut a: u32, mut h: u32) -> u32 {
  a = a.wrapping_mul(C1);
  a = rotate32(a, 17);
  a = a.wrapping_mul(C2);
  h ^= a;
  h = rotate32(h, 19);
  h.wrapping_mul(5).wrapping_add(N)
}

/// Murmur-inspired reduction of 128 bits to 64, with a caller-chosen
/// multiplier.
#[inline(always)]
#[must_use]
pub const fn hash_len16_mul(u: u64, v: u64, mul: u64) -> u64 {
  let mut a = (u ^ v).wrapping_mul(mul);
  a ^= a >> 47;
  let mut b = (v ^ a).wrapping_mul(mul);
  b ^= b >> 47;
  b.wrapping_mul(mul)
}

/// Reduce a 128-bit value to 64 bits.
#[inline(always)]
#[must_use]
pub const fn hash128_to_64(x: U128) -> u64 {
  hash_len16_mul(x.low, x.high, KMUL)
}

#[inline(always)]
#[must_use]
pub const fn hash_len16(u: u64, v: u64) -> u64 {
  hash128_to_64(U128::new(u, v))
}

/// 16-byte hash of four words and two seeds. Not a digest on its own; the
/// streaming loops feed it 32 bytes at a time.
#[inline(always)]
#[must_use]
pub const fn weak_hash_len32_with_seeds(w: u64, x: u64, y: u64, z: u64, mut a: u64, mut b: u64) -> U128 {
  a = a.wrapping_add(w);
  b = rotate64(b.wrapping_add(a).wrapping_add(z), 21);
  let c = a;
  a = a.wrapping_add(x);
  a = a.wrapping_add(y);
  b = b.wrapping_add(rotate64(a, 44));
  U128::new(a.wrapping_add(z), b.wrapping_add(c))
}

/// [`weak_hash_len32_with_seeds`] over the 32 bytes at `data[offset..]`.
///
/// # Panics
///
/// Panics if `offset + 32 > data.len()`.
#[inline(always)]
#[must_use]
pub fn weak_hash_len32_with_seeds_at(data: &[u8], offset: usize, a: u64, b: u64) -> U128 {
  use crate::load::fetch64;

  weak_hash_len32_with_seeds(
    fetch64(data, offset),
    fetch64(data, offset + 8),
    fetch64(data, offset + 16),
    fetch64(data, offset + 24),
    a,
    b,
  )
}
