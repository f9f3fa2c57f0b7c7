//! Cipher module: fixed-shift substitution over the Latin alphabet
//!
//! Each ASCII letter moves 15 positions forward (cyclically), keeping its
//! case. Everything else passes through unchanged.

use thiserror::Error;

/// How far each letter moves forward in the alphabet
pub const CIPHER_SHIFT: u8 = 15;

/// Letters in the Latin alphabet
pub const ALPHABET_SIZE: u8 = 26;

/// Errors raised by message validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// The supplied bytes are not valid text
    #[error("input must be text")]
    NotText,

    /// The message is empty once surrounding whitespace is removed
    #[error("message cannot be empty")]
    EmptyMessage,
}

/// Trim surrounding whitespace and reject empty messages
pub fn validate(message: &str) -> Result<&str, CipherError> {
    let cleaned = message.trim();
    if cleaned.is_empty() {
        return Err(CipherError::EmptyMessage);
    }
    Ok(cleaned)
}

/// Shift a single character forward by [`CIPHER_SHIFT`], wrapping within
/// its case range. Code points outside A-Z/a-z are returned unchanged,
/// so accented letters and other scripts are never touched.
pub fn shift_char(ch: char) -> char {
    let base = match ch {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return ch,
    };

    let shifted = (ch as u8 - base + CIPHER_SHIFT) % ALPHABET_SIZE;
    (base + shifted) as char
}

/// Inverse of [`shift_char`]: the complementary shift back to the original
fn unshift_char(ch: char) -> char {
    let base = match ch {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return ch,
    };

    let shifted = (ch as u8 - base + (ALPHABET_SIZE - CIPHER_SHIFT)) % ALPHABET_SIZE;
    (base + shifted) as char
}

/// Encode a message with the 15-letter shift cipher
///
/// The message is validated first: surrounding whitespace is trimmed and an
/// empty result is rejected. The output has exactly as many characters as
/// the validated input, position for position.
pub fn encode(message: &str) -> Result<String, CipherError> {
    let cleaned = validate(message)?;
    Ok(cleaned.chars().map(shift_char).collect())
}

/// Encode raw bytes, rejecting anything that is not valid UTF-8 text
pub fn encode_bytes(raw: &[u8]) -> Result<String, CipherError> {
    let text = std::str::from_utf8(raw).map_err(|_| CipherError::NotText)?;
    encode(text)
}

/// Decode an encoded message back to the original
///
/// Applies the complementary shift (11 positions forward, since
/// 15 + 11 = 26 wraps to the identity). Same validation as [`encode`].
pub fn decode(message: &str) -> Result<String, CipherError> {
    let cleaned = validate(message)?;
    Ok(cleaned.chars().map(unshift_char).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode("abc").unwrap(), "pqr");
    }

    #[test]
    fn test_encode_wraparound() {
        assert_eq!(encode("xyz").unwrap(), "mno");
        assert_eq!(shift_char('z'), 'o');
        assert_eq!(shift_char('Z'), 'O');
    }

    #[test]
    fn test_encode_preserves_case_and_punctuation() {
        assert_eq!(encode("Hello, World!").unwrap(), "Wtaad, Ldgas!");
    }

    #[test]
    fn test_encode_trims_before_encoding() {
        assert_eq!(encode("  trim me  ").unwrap(), "igxb bt");
    }

    #[test]
    fn test_encode_preserves_length() {
        let message = "The quick brown fox jumps over 13 lazy dogs!";
        let encoded = encode(message).unwrap();
        assert_eq!(encoded.chars().count(), message.chars().count());
    }

    #[test]
    fn test_encode_preserves_case_per_position() {
        let message = "MiXeD CaSe 123";
        let encoded = encode(message).unwrap();
        for (orig, enc) in message.chars().zip(encoded.chars()) {
            assert_eq!(orig.is_uppercase(), enc.is_uppercase());
            assert_eq!(orig.is_lowercase(), enc.is_lowercase());
        }
    }

    #[test]
    fn test_non_alphabetic_unchanged() {
        assert_eq!(encode("123 !?# \t .").unwrap(), "123 !?# \t .");
    }

    #[test]
    fn test_non_ascii_letters_pass_through() {
        // Shifting is restricted to the Latin alphabet
        assert_eq!(shift_char('é'), 'é');
        assert_eq!(shift_char('日'), '日');
        assert_eq!(encode("café").unwrap(), "rpué");
    }

    #[test]
    fn test_decode_inverts_encode() {
        let message = "Hello, World!";
        let encoded = encode(message).unwrap();
        assert_eq!(decode(&encoded).unwrap(), message);
    }

    #[test]
    fn test_complementary_shift_is_two_sided_inverse() {
        for ch in ('a'..='z').chain('A'..='Z') {
            assert_eq!(unshift_char(shift_char(ch)), ch);
            assert_eq!(shift_char(unshift_char(ch)), ch);
        }
    }

    #[test]
    fn test_double_encode_is_shift_of_four() {
        // 15 + 15 = 30, and 30 mod 26 = 4
        let twice = encode(&encode("abc").unwrap()).unwrap();
        assert_eq!(twice, "efg");
        assert_eq!(encode(&encode("xyz").unwrap()).unwrap(), "bcd");
    }

    #[test]
    fn test_empty_message_rejected() {
        assert_eq!(encode(""), Err(CipherError::EmptyMessage));
        assert_eq!(encode("   "), Err(CipherError::EmptyMessage));
        assert_eq!(encode(" \t\n "), Err(CipherError::EmptyMessage));
        assert_eq!(decode(""), Err(CipherError::EmptyMessage));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        assert_eq!(encode_bytes(&[0xff, 0xfe]), Err(CipherError::NotText));
    }

    #[test]
    fn test_valid_bytes_encode() {
        assert_eq!(encode_bytes(b"abc").unwrap(), "pqr");
    }

    #[test]
    fn test_validate_returns_trimmed() {
        assert_eq!(validate("  hello  ").unwrap(), "hello");
        assert_eq!(validate("hello").unwrap(), "hello");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let message = "Same in, same out.";
        assert_eq!(encode(message).unwrap(), encode(message).unwrap());
    }
}
