//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is intentionally one-shot: the whole input must be addressable at
/// once.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Compute the unseeded hash of `data`.
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output;
}

/// A [`FastHash`] that also has a seeded form.
///
/// The unseeded [`FastHash::hash`] is *not* required to equal
/// `hash_with_seed(Seed::default(), data)`; many algorithms define the seeded
/// variant as an extra mixing step over the unseeded digest.
pub trait SeededFastHash: FastHash {
  /// Seed type (`u64` or a 128-bit pair).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
