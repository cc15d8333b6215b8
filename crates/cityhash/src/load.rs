//! Endian-neutral fixed-width loads.
//!
//! CityHash is defined over little-endian words. Loads read the host's native
//! representation and then byte-swap on big-endian targets, so digests are
//! identical on every platform.
//!
//! Every load is a bounds-checked slice access: a read past the end of the
//! input panics instead of touching memory outside the slice.

#![allow(clippy::indexing_slicing)] // Bounds are checked by the slice access itself

/// `true` when the compilation target stores integers big-endian.
pub const HOST_IS_BIG_ENDIAN: bool = cfg!(target_endian = "big");

/// Put a natively-loaded `u32` into little-endian (reference) order.
///
/// `big_endian_host` selects whether a swap is needed; [`fetch32`] passes
/// [`HOST_IS_BIG_ENDIAN`].
#[inline(always)]
#[must_use]
pub const fn canonical32(raw: u32, big_endian_host: bool) -> u32 {
  if big_endian_host { raw.swap_bytes() } else { raw }
}

/// Put a natively-loaded `u64` into little-endian (reference) order.
#[inline(always)]
#[must_use]
pub const fn canonical64(raw: u64, big_endian_host: bool) -> u64 {
  if big_endian_host { raw.swap_bytes() } else { raw }
}

/// Load 4 bytes at `offset` as a little-endian `u32`.
///
/// # Panics
///
/// Panics if `offset + 4 > data.len()`.
#[inline(always)]
#[must_use]
pub fn fetch32(data: &[u8], offset: usize) -> u32 {
  let mut raw = [0u8; 4];
  raw.copy_from_slice(&data[offset..offset + 4]);
  canonical32(u32::from_ne_bytes(raw), HOST_IS_BIG_ENDIAN)
}

/// Load 8 bytes at `offset` as a little-endian `u64`.
///
/// # Panics
///
/// Panics if `offset + 8 > data.len()`.
#[inline(always)]
#[must_use]
pub fn fetch64(data: &[u8], offset: usize) -> u64 {
  let mut raw = [0u8; 8];
  raw.copy_from_slice(&data[offset..offset + 8]);
  canonical64(u64::from_ne_bytes(raw), HOST_IS_BIG_ENDIAN)
}
