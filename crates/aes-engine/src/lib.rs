//! AES block cipher engine for 128, 192 and 256-bit keys.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - GF(2^8) arithmetic and the derived S-box tables.
//! - Key expansion for all three variants.
//! - Single-block encryption and decryption with an optional per-step observer.
//!
//! Modes of operation and padding are left to callers. The table-lookup
//! implementation is not constant time and should not be treated as
//! side-channel hardened.
//!
//! ```
//! use aes_engine::Aes;
//!
//! let aes = Aes::new(128)?;
//! let schedule = aes.expand_key(&[0u8; 16])?;
//! let ct = aes.encrypt_block(b"sixteen byte msg", &schedule)?;
//! assert_eq!(&aes.decrypt_block(&ct, &schedule)?, b"sixteen byte msg");
//! # Ok::<(), aes_engine::AesError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;
mod schedule;
mod trace;

pub use crate::block::{Block, Word, BLOCK_LEN, NB};
pub use crate::cipher::Aes;
pub use crate::error::{AesError, Result};
pub use crate::key::{KeySchedule, Variant};
pub use crate::trace::{Direction, NoopObserver, Recorder, RoundEvent, RoundObserver, Step};
