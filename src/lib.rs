//! shiftr: message encoding with a fixed 15-letter shift cipher
//!
//! Each alphabetic character moves 15 positions forward in the alphabet,
//! wrapping from 'z' back to 'a'. Case is preserved and everything that is
//! not an ASCII letter passes through unchanged.
//!
//! ## How it works
//!
//! 1. **Validate**: trim whitespace, reject empty input
//! 2. **Shift**: move each letter 15 positions forward, cyclically
//! 3. **Preserve**: case and non-letter characters stay as they are
//!
//! The transformation is a pure function: no I/O, no state, no randomness.

pub mod cipher;
pub mod session;

pub use cipher::{decode, encode, encode_bytes, CipherError, ALPHABET_SIZE, CIPHER_SHIFT};
