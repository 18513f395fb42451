//! Single-alphabet shift cipher.
//!
//! Messages are normalized to the letters `A`-`Z` (uppercased, everything
//! else dropped) and each letter is shifted by the key modulo 26.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use rand::Rng;
use thiserror::Error;

/// Size of the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Errors raised when configuring a [`ShiftCipher`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftError {
    /// The key is outside `0..=25`.
    #[error("invalid shift key {0} (expected 0..=25)")]
    InvalidKey(u8),
}

/// Result alias for shift cipher operations.
pub type Result<T> = core::result::Result<T, ShiftError>;

/// Shift cipher with a fixed key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftCipher {
    key: u8,
}

impl ShiftCipher {
    /// Creates a cipher for `key` in `0..=25`.
    pub fn new(key: u8) -> Result<Self> {
        if key >= ALPHABET_LEN {
            return Err(ShiftError::InvalidKey(key));
        }
        Ok(Self { key })
    }

    /// Creates a cipher with a key drawn uniformly from `0..=25`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            key: rng.gen_range(0..ALPHABET_LEN),
        }
    }

    /// The configured key.
    pub fn key(&self) -> u8 {
        self.key
    }

    /// Normalizes and encrypts `message`.
    pub fn encrypt_message(&self, message: &str) -> String {
        shift_all(message, self.key)
    }

    /// Normalizes and decrypts `message`.
    pub fn decrypt_message(&self, message: &str) -> String {
        shift_all(message, (ALPHABET_LEN - self.key) % ALPHABET_LEN)
    }
}

/// Uppercases `text` and drops every character outside `A`-`Z`.
pub fn normalize(text: &str) -> String {
    letters(text).map(char::from).collect()
}

fn letters(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .map(|c| c as u8)
}

fn shift_all(text: &str, by: u8) -> String {
    letters(text)
        .map(|c| char::from(b'A' + (c - b'A' + by) % ALPHABET_LEN))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn rejects_out_of_range_key() {
        assert_eq!(ShiftCipher::new(26), Err(ShiftError::InvalidKey(26)));
        assert!(ShiftCipher::new(25).is_ok());
        assert!(ShiftCipher::new(0).is_ok());
    }

    #[test]
    fn normalizes_input() {
        assert_eq!(normalize("Secret Message to be encrypted!"), "SECRETMESSAGETOBEENCRYPTED");
        assert_eq!(normalize("123 ?!"), "");
        // Non-ASCII letters are dropped even when they uppercase to something.
        assert_eq!(normalize("straße"), "STRASSE");
        assert_eq!(normalize("été"), "T");
    }

    #[test]
    fn classic_caesar() {
        let cipher = ShiftCipher::new(3).unwrap();
        assert_eq!(cipher.encrypt_message("attack at dawn, xyz"), "DWWDFNDWGDZQABC");
        assert_eq!(cipher.decrypt_message("DWWDFNDWGDZQABC"), "ATTACKATDAWNXYZ");
    }

    #[test]
    fn zero_key_is_identity_after_normalizing() {
        let cipher = ShiftCipher::new(0).unwrap();
        assert_eq!(cipher.encrypt_message("Hello, World"), "HELLOWORLD");
        assert_eq!(cipher.decrypt_message("hello"), "HELLO");
    }

    #[test]
    fn round_trip_every_key() {
        let text = "The quick brown fox jumps over the lazy dog";
        for key in 0..ALPHABET_LEN {
            let cipher = ShiftCipher::new(key).unwrap();
            let ct = cipher.encrypt_message(text);
            assert_eq!(cipher.decrypt_message(&ct), normalize(text));
        }
    }

    #[test]
    fn generated_keys_are_in_range() {
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        for _ in 0..200 {
            assert!(ShiftCipher::generate(&mut rng).key() < ALPHABET_LEN);
        }
    }
}
