//! Error types for hash entry points.
//!
//! Hashing itself never fails. The single contract a caller can break is
//! declaring more input bytes than the buffer actually holds.

use core::fmt;

/// A declared input length exceeds the backing buffer.
///
/// Returned when a caller hands over a `(buffer, length)` pair whose `length`
/// is larger than the buffer. Hashing such a pair would have to read memory
/// that does not belong to the input, so it is rejected up front.
///
/// # Examples
///
/// ```
/// use traits::LengthError;
///
/// fn declared(buf: &[u8], len: usize) -> Result<&[u8], LengthError> {
///   buf.get(..len).ok_or(LengthError::new(len, buf.len()))
/// }
///
/// assert!(declared(b"abcd", 4).is_ok());
/// let err = declared(b"abcd", 5).unwrap_err();
/// assert_eq!(err.requested(), 5);
/// assert_eq!(err.available(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct LengthError {
  requested: usize,
  available: usize,
}

impl LengthError {
  /// Create a new length error for `requested` bytes out of `available`.
  #[inline]
  #[must_use]
  pub const fn new(requested: usize, available: usize) -> Self {
    Self { requested, available }
  }

  /// The length the caller declared.
  #[inline]
  #[must_use]
  pub const fn requested(&self) -> usize {
    self.requested
  }

  /// The number of bytes the buffer actually holds.
  #[inline]
  #[must_use]
  pub const fn available(&self) -> usize {
    self.available
  }
}

impl fmt::Display for LengthError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "declared input length {} exceeds buffer of {} bytes",
      self.requested, self.available
    )
  }
}

impl core::error::Error for LengthError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(
      LengthError::new(17, 16).to_string(),
      "declared input length 17 exceeds buffer of 16 bytes"
    );
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", LengthError::new(1, 0));
    assert_eq!(dbg, "LengthError { requested: 1, available: 0 }");
  }

  #[test]
  fn accessors() {
    let e = LengthError::new(300, 200);
    assert_eq!(e.requested(), 300);
    assert_eq!(e.available(), 200);
  }

  #[test]
  fn equality() {
    assert_eq!(LengthError::new(2, 1), LengthError::new(2, 1));
    assert_ne!(LengthError::new(2, 1), LengthError::new(3, 1));
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<LengthError>();
    assert_sync::<LengthError>();
    assert_error::<LengthError>();
  }

  #[test]
  fn error_has_no_source() {
    use core::error::Error;

    assert!(LengthError::new(1, 0).source().is_none());
  }
}
