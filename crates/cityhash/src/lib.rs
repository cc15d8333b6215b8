//! CityHash v1.1 (**NOT CRYPTO**).
//!
//! Portable implementation of the CityHash family: 32-, 64- and 128-bit
//! digests, bit-compatible with the reference implementation on every target.
//! Suitable for hash tables, sharding, fingerprinting and deduplication. Do
//! not use it where an adversary chooses the input.
//!
//! This crate is `no_std` compatible, never allocates, and contains no
//! `unsafe` code.
//!
//! # Entry Points
//!
//! | Function | Output | Reference name |
//! |----------|--------|----------------|
//! | [`hash32`] | `u32` | `CityHash32` |
//! | [`hash64`] | `u64` | `CityHash64` |
//! | [`hash64_with_seed`] | `u64` | `CityHash64WithSeed` |
//! | [`hash64_with_seeds`] | `u64` | `CityHash64WithSeeds` |
//! | [`hash128`] | [`U128`] | `CityHash128` |
//! | [`hash128_with_seed`] | [`U128`] | `CityHash128WithSeed` |
//!
//! The input length is the slice length. Callers holding a buffer plus a
//! separately declared length go through [`prefix`], which rejects a length
//! larger than the buffer:
//!
//! ```
//! let buf = [0u8; 64];
//! let digest = cityhash::hash64(cityhash::prefix(&buf, 40)?);
//! assert_eq!(digest, cityhash::hash64(&buf[..40]));
//! assert!(cityhash::prefix(&buf, 65).is_err());
//! # Ok::<(), cityhash::LengthError>(())
//! ```
//!
//! # Introspection
//!
//! [`bucket_name_32`], [`bucket_name_64`] and [`bucket_name_128`] report which
//! length bucket an input of a given size is routed to.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod bucket;
mod city128;
mod city32;
mod city64;
pub mod fast;
pub mod load;
pub mod mix;
mod pair;

pub use bucket::{bucket_name_32, bucket_name_64, bucket_name_128};
pub use city32::hash32;
pub use city64::{hash64, hash64_with_seed, hash64_with_seeds};
pub use city128::{hash128, hash128_with_seed};
pub use fast::{City32, City64, City128};
pub use mix::hash128_to_64;
pub use pair::U128;
pub use traits::{FastHash, LengthError, SeededFastHash};

/// The first `len` bytes of `buf`.
///
/// Validates a caller-declared input length against the buffer holding it.
///
/// # Errors
///
/// Returns [`LengthError`] when `len > buf.len()`.
#[inline]
pub fn prefix(buf: &[u8], len: usize) -> Result<&[u8], LengthError> {
  buf.get(..len).ok_or(LengthError::new(len, buf.len()))
}
