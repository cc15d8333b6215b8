//! Declared lengths never panic and never read past the declared prefix.

#![no_main]

use arbitrary::Arbitrary;
use cityhash::{hash32, hash64, hash128, prefix};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  buf: Vec<u8>,
  declared: u16,
}

fuzz_target!(|input: Input| {
  let len = usize::from(input.declared);
  match prefix(&input.buf, len) {
    Ok(head) => {
      assert_eq!(head.len(), len);
      let owned = head.to_vec();
      assert_eq!(hash32(head), hash32(&owned));
      assert_eq!(hash64(head), hash64(&owned));
      assert_eq!(hash128(head), hash128(&owned));
    }
    Err(err) => {
      assert!(len > input.buf.len());
      assert_eq!(err.requested(), len);
      assert_eq!(err.available(), input.buf.len());
    }
  }
});
