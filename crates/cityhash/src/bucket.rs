//! Length buckets.
//!
//! Every CityHash width picks a routine by input length. The hash entry points
//! and the `bucket_name_*` introspection functions both go through the
//! selectors here, so the reported bucket is always the one that ran.

/// Routine selected by [`crate::hash32`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Bucket32 {
  Len0to4 = 0,
  Len5to12 = 1,
  Len13to24 = 2,
  Long = 3,
}

impl Bucket32 {
  #[inline(always)]
  #[must_use]
  pub const fn for_len(len: usize) -> Self {
    if len <= 4 {
      Self::Len0to4
    } else if len <= 12 {
      Self::Len5to12
    } else if len <= 24 {
      Self::Len13to24
    } else {
      Self::Long
    }
  }

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Len0to4 => "len0to4",
      Self::Len5to12 => "len5to12",
      Self::Len13to24 => "len13to24",
      Self::Long => "long",
    }
  }
}

/// Routine selected by [`crate::hash64`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Bucket64 {
  Len0to16 = 0,
  Len17to32 = 1,
  Len33to64 = 2,
  Long = 3,
}

impl Bucket64 {
  #[inline(always)]
  #[must_use]
  pub const fn for_len(len: usize) -> Self {
    if len <= 16 {
      Self::Len0to16
    } else if len <= 32 {
      Self::Len17to32
    } else if len <= 64 {
      Self::Len33to64
    } else {
      Self::Long
    }
  }

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Len0to16 => "len0to16",
      Self::Len17to32 => "len17to32",
      Self::Len33to64 => "len33to64",
      Self::Long => "long",
    }
  }
}

/// Routine selected by [`crate::hash128_with_seed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Bucket128 {
  MurmurLen0to16 = 0,
  MurmurLen17to127 = 1,
  Long = 2,
}

impl Bucket128 {
  /// Bucket for a seeded hash over `len` bytes.
  #[inline(always)]
  #[must_use]
  pub const fn for_len(len: usize) -> Self {
    if len <= 16 {
      Self::MurmurLen0to16
    } else if len < 128 {
      Self::MurmurLen17to127
    } else {
      Self::Long
    }
  }

  /// Bucket for the unseeded [`crate::hash128`], which consumes the first 16
  /// bytes as a seed when it can.
  #[inline]
  #[must_use]
  pub const fn for_unseeded_len(len: usize) -> Self {
    if len >= 16 { Self::for_len(len - 16) } else { Self::for_len(len) }
  }

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::MurmurLen0to16 => "murmur_len0to16",
      Self::MurmurLen17to127 => "murmur_len17to127",
      Self::Long => "long",
    }
  }
}

/// Name of the routine [`crate::hash32`] runs for `len` input bytes.
#[inline]
#[must_use]
pub const fn bucket_name_32(len: usize) -> &'static str {
  Bucket32::for_len(len).as_str()
}

/// Name of the routine [`crate::hash64`] (and its seeded forms) runs for `len`
/// input bytes.
#[inline]
#[must_use]
pub const fn bucket_name_64(len: usize) -> &'static str {
  Bucket64::for_len(len).as_str()
}

/// Name of the routine [`crate::hash128`] runs for `len` input bytes.
#[inline]
#[must_use]
pub const fn bucket_name_128(len: usize) -> &'static str {
  Bucket128::for_unseeded_len(len).as_str()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn edges_32() {
    assert_eq!(Bucket32::for_len(0), Bucket32::Len0to4);
    assert_eq!(Bucket32::for_len(4), Bucket32::Len0to4);
    assert_eq!(Bucket32::for_len(5), Bucket32::Len5to12);
    assert_eq!(Bucket32::for_len(12), Bucket32::Len5to12);
    assert_eq!(Bucket32::for_len(13), Bucket32::Len13to24);
    assert_eq!(Bucket32::for_len(24), Bucket32::Len13to24);
    assert_eq!(Bucket32::for_len(25), Bucket32::Long);
  }

  #[test]
  fn edges_64() {
    assert_eq!(Bucket64::for_len(0), Bucket64::Len0to16);
    assert_eq!(Bucket64::for_len(16), Bucket64::Len0to16);
    assert_eq!(Bucket64::for_len(17), Bucket64::Len17to32);
    assert_eq!(Bucket64::for_len(32), Bucket64::Len17to32);
    assert_eq!(Bucket64::for_len(33), Bucket64::Len33to64);
    assert_eq!(Bucket64::for_len(64), Bucket64::Len33to64);
    assert_eq!(Bucket64::for_len(65), Bucket64::Long);
  }

  #[test]
  fn edges_128() {
    assert_eq!(Bucket128::for_len(16), Bucket128::MurmurLen0to16);
    assert_eq!(Bucket128::for_len(17), Bucket128::MurmurLen17to127);
    assert_eq!(Bucket128::for_len(127), Bucket128::MurmurLen17to127);
    assert_eq!(Bucket128::for_len(128), Bucket128::Long);

    // The unseeded form strips a 16-byte seed first.
    assert_eq!(Bucket128::for_unseeded_len(15), Bucket128::MurmurLen0to16);
    assert_eq!(Bucket128::for_unseeded_len(32), Bucket128::MurmurLen0to16);
    assert_eq!(Bucket128::for_unseeded_len(33), Bucket128::MurmurLen17to127);
    assert_eq!(Bucket128::for_unseeded_len(143), Bucket128::MurmurLen17to127);
    assert_eq!(Bucket128::for_unseeded_len(144), Bucket128::Long);
  }

  #[test]
  fn names() {
    assert_eq!(bucket_name_32(25), "long");
    assert_eq!(bucket_name_64(40), "len33to64");
    assert_eq!(bucket_name_128(0), "murmur_len0to16");
  }
}
