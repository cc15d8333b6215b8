//! Core traits for the cityhash workspace.
//!
//! This crate provides the foundational traits that hash implementations in
//! this workspace conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot non-cryptographic hash | CityHash32/64/128 |
//! | [`SeededFastHash`] | Seeded variant of a [`FastHash`] | CityHash64WithSeed |
//!
//! # Error Types
//!
//! - [`LengthError`] - A declared input length exceeds the backing buffer
//!
//! `unwrap`, `expect` and slice indexing are denied outside tests.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;

pub use error::LengthError;
pub use fast_hash::{FastHash, SeededFastHash};
