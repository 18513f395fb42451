//! AES engine: key expansion plus single-block encryption and decryption.

use crate::block::Block;
use crate::error::{AesError, Result};
use crate::key::{KeySchedule, Variant};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule;
use crate::trace::{Direction, NoopObserver, RoundEvent, RoundObserver, Step};

/// Block cipher engine for one AES variant.
///
/// The engine holds no per-call state: every encryption or decryption works
/// on its own local copy of the block, so one engine and one [`KeySchedule`]
/// can be shared freely between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes {
    variant: Variant,
}

impl Aes {
    /// Creates an engine for a key size given in bits (128, 192 or 256).
    pub fn new(bits: usize) -> Result<Self> {
        Variant::try_from(bits).map(Self::with_variant)
    }

    /// Creates an engine for `variant`.
    pub const fn with_variant(variant: Variant) -> Self {
        Self { variant }
    }

    /// Variant fixed at construction.
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Expands a raw key of exactly `4 * Nk` bytes into round keys.
    pub fn expand_key(&self, key: &[u8]) -> Result<KeySchedule> {
        schedule::expand_key(self.variant, key)
    }

    /// Encrypts one 16-byte block.
    pub fn encrypt_block(&self, block: &[u8], schedule: &KeySchedule) -> Result<Block> {
        self.encrypt_block_observed(block, schedule, &mut NoopObserver)
    }

    /// Decrypts one 16-byte block.
    pub fn decrypt_block(&self, block: &[u8], schedule: &KeySchedule) -> Result<Block> {
        self.decrypt_block_observed(block, schedule, &mut NoopObserver)
    }

    /// Encrypts one block, reporting each intermediate step to `observer`.
    pub fn encrypt_block_observed<O>(
        &self,
        block: &[u8],
        schedule: &KeySchedule,
        observer: &mut O,
    ) -> Result<Block>
    where
        O: RoundObserver + ?Sized,
    {
        let state = self.check_inputs(block, schedule)?;
        Ok(encrypt_state(state, schedule, observer))
    }

    /// Decrypts one block, reporting each intermediate step to `observer`.
    pub fn decrypt_block_observed<O>(
        &self,
        block: &[u8],
        schedule: &KeySchedule,
        observer: &mut O,
    ) -> Result<Block>
    where
        O: RoundObserver + ?Sized,
    {
        let state = self.check_inputs(block, schedule)?;
        Ok(decrypt_state(state, schedule, observer))
    }

    fn check_inputs(&self, block: &[u8], schedule: &KeySchedule) -> Result<Block> {
        if schedule.variant() != self.variant {
            return Err(AesError::ScheduleMismatch {
                engine: self.variant.bits(),
                schedule: schedule.variant().bits(),
            });
        }
        Block::try_from(block).map_err(|_| AesError::InvalidBlockLength {
            actual: block.len(),
        })
    }
}

struct Emitter<'o, O: ?Sized> {
    observer: &'o mut O,
    direction: Direction,
}

impl<O: RoundObserver + ?Sized> Emitter<'_, O> {
    #[inline(always)]
    fn emit(&mut self, round: usize, step: Step, bytes: &Block) {
        let snapshot = *bytes;
        self.observer.observe(&RoundEvent {
            direction: self.direction,
            round,
            step,
            bytes: &snapshot,
        });
    }
}

fn encrypt_state<O>(mut state: Block, schedule: &KeySchedule, observer: &mut O) -> Block
where
    O: RoundObserver + ?Sized,
{
    let nr = schedule.rounds();
    let mut out = Emitter {
        observer,
        direction: Direction::Encrypt,
    };

    out.emit(0, Step::Input, &state);
    let round_key = schedule.round_key(0);
    out.emit(0, Step::RoundKey, &round_key);
    add_round_key(&mut state, &round_key);

    for round in 1..nr {
        out.emit(round, Step::Start, &state);
        sub_bytes(&mut state);
        out.emit(round, Step::SubBytes, &state);
        shift_rows(&mut state);
        out.emit(round, Step::ShiftRows, &state);
        mix_columns(&mut state);
        out.emit(round, Step::MixColumns, &state);
        let round_key = schedule.round_key(round);
        out.emit(round, Step::RoundKey, &round_key);
        add_round_key(&mut state, &round_key);
    }

    out.emit(nr, Step::Start, &state);
    sub_bytes(&mut state);
    out.emit(nr, Step::SubBytes, &state);
    shift_rows(&mut state);
    out.emit(nr, Step::ShiftRows, &state);
    let round_key = schedule.round_key(nr);
    out.emit(nr, Step::RoundKey, &round_key);
    add_round_key(&mut state, &round_key);
    out.emit(nr, Step::Output, &state);

    state
}

fn decrypt_state<O>(mut state: Block, schedule: &KeySchedule, observer: &mut O) -> Block
where
    O: RoundObserver + ?Sized,
{
    let nr = schedule.rounds();
    let mut out = Emitter {
        observer,
        direction: Direction::Decrypt,
    };

    out.emit(0, Step::Input, &state);
    let round_key = schedule.round_key(nr);
    out.emit(0, Step::RoundKey, &round_key);
    add_round_key(&mut state, &round_key);

    // Listing rounds count up while the schedule is consumed from the end.
    for round in (1..nr).rev() {
        let listed = nr - round;
        out.emit(listed, Step::Start, &state);
        inv_shift_rows(&mut state);
        out.emit(listed, Step::ShiftRows, &state);
        inv_sub_bytes(&mut state);
        out.emit(listed, Step::SubBytes, &state);
        let round_key = schedule.round_key(round);
        out.emit(listed, Step::RoundKey, &round_key);
        add_round_key(&mut state, &round_key);
        out.emit(listed, Step::AddRoundKey, &state);
        inv_mix_columns(&mut state);
    }

    out.emit(nr, Step::Start, &state);
    inv_shift_rows(&mut state);
    out.emit(nr, Step::ShiftRows, &state);
    inv_sub_bytes(&mut state);
    out.emit(nr, Step::SubBytes, &state);
    let round_key = schedule.round_key(0);
    out.emit(nr, Step::RoundKey, &round_key);
    add_round_key(&mut state, &round_key);
    out.emit(nr, Step::Output, &state);

    state
}
