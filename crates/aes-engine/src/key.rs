//! Key-size variants and the expanded key schedule type.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, Word, NB};
use crate::error::{AesError, Result};
use crate::schedule::RCON;

/// AES key-size configuration, fixing `Nk` and `Nr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl Variant {
    /// All supported variants, smallest key first.
    pub const ALL: [Variant; 3] = [Variant::Aes128, Variant::Aes192, Variant::Aes256];

    /// Selects the variant whose raw key is `len` bytes long.
    pub fn from_key_len(len: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.key_len() == len)
            .ok_or(AesError::InvalidKeyLength {
                expected: Variant::Aes128.key_len(),
                actual: len,
            })
    }

    /// Key size in bits.
    pub const fn bits(self) -> usize {
        self.nk() * 32
    }

    /// Key length in words (`Nk`).
    pub const fn nk(self) -> usize {
        match self {
            Variant::Aes128 => 4,
            Variant::Aes192 => 6,
            Variant::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Raw key length in bytes (`4 * Nk`).
    pub const fn key_len(self) -> usize {
        4 * self.nk()
    }

    /// Number of words in the expanded schedule (`Nb * (Nr + 1)`).
    pub const fn schedule_len(self) -> usize {
        NB * (self.nr() + 1)
    }

    /// Round constants for rounds `1..=Nr`; entry `j - 1` belongs to round `j`.
    pub fn rcon(self) -> &'static [u8] {
        &RCON[..self.nr()]
    }
}

impl TryFrom<usize> for Variant {
    type Error = AesError;

    fn try_from(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(Variant::Aes128),
            192 => Ok(Variant::Aes192),
            256 => Ok(Variant::Aes256),
            _ => Err(AesError::InvalidKeyVariant { bits }),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// Expanded round keys for one cipher key.
///
/// Holds exactly `Nb * (Nr + 1)` words. The words are wiped when the schedule
/// is dropped, and `Debug` output never includes them.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    #[zeroize(skip)]
    variant: Variant,
    words: Vec<Word>,
}

impl KeySchedule {
    pub(crate) fn from_words(variant: Variant, words: Vec<Word>) -> Self {
        debug_assert_eq!(words.len(), variant.schedule_len());
        Self { variant, words }
    }

    /// Variant the schedule was expanded for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of rounds covered (`Nr`).
    pub fn rounds(&self) -> usize {
        self.variant.nr()
    }

    /// Number of words in the schedule.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; a schedule holds at least `Nb * 11` words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word `i` of the schedule, if in range.
    pub fn word(&self, i: usize) -> Option<&Word> {
        self.words.get(i)
    }

    /// Flattened round key for `round` (0..=Nr).
    ///
    /// # Panics
    ///
    /// Panics if `round > Nr`.
    pub fn round_key(&self, round: usize) -> Block {
        let mut out = [0u8; 16];
        for (chunk, word) in out
            .chunks_exact_mut(4)
            .zip(&self.words[round * NB..(round + 1) * NB])
        {
            chunk.copy_from_slice(word);
        }
        out
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("variant", &self.variant)
            .field("words", &self.words.len())
            .finish_non_exhaustive()
    }
}
