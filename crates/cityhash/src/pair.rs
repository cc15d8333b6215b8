//! 128-bit digest and seed value.

use core::fmt;

/// An ordered pair of 64-bit words: a 128-bit CityHash digest or seed.
///
/// `low` is the reference implementation's `first`/lower half and `high` its
/// `second`/higher half. The order matters for any serialization layered on
/// top: [`U128::to_le_bytes`] writes `low` first, then `high`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U128 {
  pub low: u64,
  pub high: u64,
}

impl U128 {
  #[inline]
  #[must_use]
  pub const fn new(low: u64, high: u64) -> Self {
    Self { low, high }
  }

  #[inline]
  #[must_use]
  pub const fn low(self) -> u64 {
    self.low
  }

  #[inline]
  #[must_use]
  pub const fn high(self) -> u64 {
    self.high
  }

  /// Reference byte layout: `low` little-endian, then `high` little-endian.
  #[inline]
  #[must_use]
  pub const fn to_le_bytes(self) -> [u8; 16] {
    self.to_u128().to_le_bytes()
  }

  #[inline]
  #[must_use]
  pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
    Self::from_u128(u128::from_le_bytes(bytes))
  }

  #[inline]
  #[must_use]
  pub const fn to_u128(self) -> u128 {
    ((self.high as u128) << 64) | self.low as u128
  }

  #[inline]
  #[must_use]
  pub const fn from_u128(value: u128) -> Self {
    Self::new(value as u64, (value >> 64) as u64)
  }
}

impl From<u128> for U128 {
  #[inline]
  fn from(value: u128) -> Self {
    Self::from_u128(value)
  }
}

impl From<U128> for u128 {
  #[inline]
  fn from(value: U128) -> Self {
    value.to_u128()
  }
}

impl From<(u64, u64)> for U128 {
  #[inline]
  fn from((low, high): (u64, u64)) -> Self {
    Self::new(low, high)
  }
}

impl From<U128> for (u64, u64) {
  #[inline]
  fn from(value: U128) -> Self {
    (value.low, value.high)
  }
}

impl fmt::Debug for U128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "U128({:#018x}, {:#018x})", self.low, self.high)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::U128;

  #[test]
  fn u128_conversion_keeps_low_in_low_bits() {
    let v = U128::new(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210);
    let wide: u128 = v.into();
    assert_eq!(wide, 0xfedc_ba98_7654_3210_0123_4567_89ab_cdef);
    assert_eq!(U128::from(wide), v);
  }

  #[test]
  fn byte_layout_is_low_then_high() {
    let v = U128::new(1, 2);
    let bytes = v.to_le_bytes();
    assert_eq!(bytes[0], 1);
    assert_eq!(bytes[8], 2);
    assert_eq!(bytes, u128::from(v).to_le_bytes());
    assert_eq!(U128::from_le_bytes(bytes), v);
  }

  #[test]
  fn tuple_conversion() {
    let v: U128 = (7u64, 9u64).into();
    assert_eq!((v.low(), v.high()), (7, 9));
    let (lo, hi): (u64, u64) = v.into();
    assert_eq!((lo, hi), (7, 9));
  }

  #[test]
  fn debug_is_hex() {
    assert_eq!(
      format!("{:?}", U128::new(0x9ae1_6a3b_2f90_404f, 1)),
      "U128(0x9ae16a3b2f90404f, 0x0000000000000001)"
    );
  }
}
