//! Error types for engine construction, key expansion and block operations.

use thiserror::Error;

/// Precondition violations reported before any output is produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesError {
    /// The requested key size is not one of 128, 192 or 256 bits.
    #[error("unsupported AES variant: {bits} bits (expected 128, 192 or 256)")]
    InvalidKeyVariant {
        /// Key size that was requested.
        bits: usize,
    },

    /// The raw key does not match the configured variant.
    #[error("invalid key length: {actual} bytes (expected {expected})")]
    InvalidKeyLength {
        /// Key length required by the variant.
        expected: usize,
        /// Key length that was supplied.
        actual: usize,
    },

    /// The block is not exactly 16 bytes.
    #[error("invalid block length: {actual} bytes (expected 16)")]
    InvalidBlockLength {
        /// Block length that was supplied.
        actual: usize,
    },

    /// The key schedule was expanded for a different variant than the engine's.
    #[error("key schedule is for AES-{schedule} but the engine is AES-{engine}")]
    ScheduleMismatch {
        /// Engine key size in bits.
        engine: usize,
        /// Schedule key size in bits.
        schedule: usize,
    },
}

/// Result alias for engine operations.
pub type Result<T> = core::result::Result<T, AesError>;
