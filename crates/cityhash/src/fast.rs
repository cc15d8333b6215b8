//! Trait-based entry points.
//!
//! Zero-sized marker types so CityHash can be used wherever a
//! [`FastHash`]/[`SeededFastHash`] is expected.

use traits::{FastHash, SeededFastHash};

use crate::{city32, city64, city128, pair::U128};

#[derive(Clone, Copy, Debug, Default)]
pub struct City32;

#[derive(Clone, Copy, Debug, Default)]
pub struct City64;

#[derive(Clone, Copy, Debug, Default)]
pub struct City128;

impl FastHash for City32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    city32::hash32(data)
  }
}

impl FastHash for City64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    city64::hash64(data)
  }
}

impl SeededFastHash for City64 {
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    city64::hash64_with_seed(data, seed)
  }
}

impl FastHash for City128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = U128;

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    city128::hash128(data)
  }
}

impl SeededFastHash for City128 {
  type Seed = U128;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    city128::hash128_with_seed(data, seed)
  }
}
