//! CityHash32.
//!
//! Four length buckets built from Murmur3 steps ([`mur`]) and the Murmur3
//! finalizer ([`fmix`]). Short buckets read overlapping words; that reuse of
//! bytes is part of the digest definition.

#![allow(clippy::indexing_slicing)] // Short-input byte reads are bounded by `len`

use crate::{
  bucket::Bucket32,
  load::fetch32,
  mix::{
    bswap32,
    c32::{C1, C2, N},
    fmix, mur, rotate32,
  },
};

#[inline(always)]
fn hash32_len0to4(data: &[u8]) -> u32 {
  let len = data.len() as u32;
  let mut b = 0u32;
  let mut c = 9u32;
  for &byte in data {
    // Bytes are folded in as signed chars.
    b = b.wrapping_mul(C1).wrapping_add(byte as i8 as u32);
    c ^= b;
  }
  fmix(mur(b, mur(len, c)))
}

#[inline(always)]
fn hash32_len5to12(data: &[u8]) -> u32 {
  let len = data.len() as u32;
  let mut a = len;
  let mut b = len.wrapping_mul(5);
  let mut c = 9u32;
  let d = b;
  a = a.wrapping_add(fetch32(data, 0));
  b = b.wrapping_add(fetch32(data, data.len() - 4));
  c = c.wrapping_add(fetch32(data, (data.len() >> 1) & 4));
  fmix(mur(c, mur(b, mur(a, d))))
}

#[inline(always)]
fn hash32_len13to24(data: &[u8]) -> u32 {
  let len = data.len();
  let a = fetch32(data, (len >> 1) - 4);
  let b = fetch32(data, 4);
  let c = fetch32(data, len - 8);
  let d = fetch32(data, len >> 1);
  let e = fetch32(data, 0);
  let f = fetch32(data, len - 4);
  let h = len as u32;

  fmix(mur(f, mur(e, mur(d, mur(c, mur(b, mur(a, h)))))))
}

#[inline(always)]
const fn scramble(k: u32) -> u32 {
  rotate32(k.wrapping_mul(C1), 17).wrapping_mul(C2)
}

#[inline(always)]
const fn step(h: u32, shift: u32) -> u32 {
  rotate32(h, shift).wrapping_mul(5).wrapping_add(N)
}

#[inline(never)]
fn hash32_long(data: &[u8]) -> u32 {
  let len = data.len();
  let mut h = len as u32;
  let mut g = C1.wrapping_mul(h);
  let mut f = g;

  let a0 = scramble(fetch32(data, len - 4));
  let a1 = scramble(fetch32(data, len - 8));
  let a2 = scramble(fetch32(data, len - 16));
  let a3 = scramble(fetch32(data, len - 12));
  let a4 = scramble(fetch32(data, len - 20));
  h = step(h ^ a0, 19);
  h = step(h ^ a2, 19);
  g = step(g ^ a1, 19);
  g = step(g ^ a3, 19);
  f = step(f.wrapping_add(a4), 19);

  // At least one 20-byte chunk is always consumed; a partial final chunk is
  // already covered by the tail words above.
  let mut iters = (len - 1) / 20;
  let mut pos = 0usize;
  loop {
    let a0 = scramble(fetch32(data, pos));
    let a1 = fetch32(data, pos + 4);
    let a2 = scramble(fetch32(data, pos + 8));
    let a3 = scramble(fetch32(data, pos + 12));
    let a4 = fetch32(data, pos + 16);
    h = step(h ^ a0, 18);
    f = rotate32(f.wrapping_add(a1), 19).wrapping_mul(C1);
    g = step(g.wrapping_add(a2), 18);
    h = step(h ^ a3.wrapping_add(a1), 19);
    g = bswap32(g ^ a4).wrapping_mul(5);
    h = bswap32(h.wrapping_add(a4.wrapping_mul(5)));
    f = f.wrapping_add(a0);
    (f, h, g) = (g, f, h);
    pos += 20;

    iters -= 1;
    if iters == 0 {
      break;
    }
  }

  g = rotate32(g, 11).wrapping_mul(C1);
  g = rotate32(g, 17).wrapping_mul(C1);
  f = rotate32(f, 11).wrapping_mul(C1);
  f = rotate32(f, 17).wrapping_mul(C1);
  h = step(h.wrapping_add(g), 19);
  h = rotate32(h, 17).wrapping_mul(C1);
  h = step(h.wrapping_add(f), 19);
  rotate32(h, 17).wrapping_mul(C1)
}

/// CityHash32 of `data`.
#[inline]
#[must_use]
pub fn hash32(data: &[u8]) -> u32 {
  match Bucket32::for_len(data.len()) {
    Bucket32::Len0to4 => hash32_len0to4(data),
    Bucket32::Len5to12 => hash32_len5to12(data),
    Bucket32::Len13to24 => hash32_len13to24(data),
    Bucket32::Long => hash32_long(data),
  }
}
