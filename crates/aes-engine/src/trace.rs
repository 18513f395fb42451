//! Optional per-step observation of the cipher state.
//!
//! The engine reports every intermediate value through a [`RoundObserver`].
//! Observers receive a read-only snapshot and cannot influence the result.
//! Labels follow the round listings in FIPS-197 Appendix C.

use crate::block::Block;

/// Whether the block is being encrypted or decrypted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Forward cipher.
    Encrypt,
    /// Inverse cipher.
    Decrypt,
}

/// Point in the round sequence at which a snapshot was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Block before any transformation.
    Input,
    /// State at the start of a round.
    Start,
    /// After (Inv)SubBytes.
    SubBytes,
    /// After (Inv)ShiftRows.
    ShiftRows,
    /// After MixColumns (forward cipher only).
    MixColumns,
    /// The round key about to be added; the snapshot holds key bytes, not state.
    RoundKey,
    /// After AddRoundKey (inverse cipher only, before InvMixColumns).
    AddRoundKey,
    /// Final output block.
    Output,
}

/// One observation delivered to a [`RoundObserver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundEvent<'a> {
    /// Cipher direction.
    pub direction: Direction,
    /// Round number as listed in FIPS-197 Appendix C (0 through `Nr`).
    pub round: usize,
    /// Which step produced the snapshot.
    pub step: Step,
    /// Snapshot of the state (or round key for [`Step::RoundKey`]).
    pub bytes: &'a Block,
}

impl RoundEvent<'_> {
    /// FIPS-197 Appendix C tag, e.g. `s_box` or `ik_sch`.
    pub fn label(&self) -> &'static str {
        match (self.direction, self.step) {
            (Direction::Encrypt, Step::Input) => "input",
            (Direction::Encrypt, Step::Start) => "start",
            (Direction::Encrypt, Step::SubBytes) => "s_box",
            (Direction::Encrypt, Step::ShiftRows) => "s_row",
            (Direction::Encrypt, Step::MixColumns) => "m_col",
            (Direction::Encrypt, Step::RoundKey) => "k_sch",
            (Direction::Encrypt, Step::AddRoundKey) => "k_add",
            (Direction::Encrypt, Step::Output) => "output",
            (Direction::Decrypt, Step::Input) => "iinput",
            (Direction::Decrypt, Step::Start) => "istart",
            (Direction::Decrypt, Step::SubBytes) => "is_box",
            (Direction::Decrypt, Step::ShiftRows) => "is_row",
            (Direction::Decrypt, Step::MixColumns) => "im_col",
            (Direction::Decrypt, Step::RoundKey) => "ik_sch",
            (Direction::Decrypt, Step::AddRoundKey) => "ik_add",
            (Direction::Decrypt, Step::Output) => "ioutput",
        }
    }
}

/// Receives snapshots while a block is processed.
pub trait RoundObserver {
    /// Called once per step, in execution order.
    fn observe(&mut self, event: &RoundEvent<'_>);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundEvent<'_>) + ?Sized,
{
    fn observe(&mut self, event: &RoundEvent<'_>) {
        (*self)(event)
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {
    #[inline(always)]
    fn observe(&mut self, _event: &RoundEvent<'_>) {}
}

/// Observer that records owned copies of every event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recorder {
    /// Recorded `(direction, round, step, bytes)` tuples in order.
    pub events: Vec<(Direction, usize, Step, Block)>,
}

impl Recorder {
    /// Returns the snapshot recorded for `(round, step)`, if any.
    pub fn find(&self, round: usize, step: Step) -> Option<&Block> {
        self.events
            .iter()
            .find(|(_, r, s, _)| *r == round && *s == step)
            .map(|(_, _, _, bytes)| bytes)
    }
}

impl RoundObserver for Recorder {
    fn observe(&mut self, event: &RoundEvent<'_>) {
        self.events
            .push((event.direction, event.round, event.step, *event.bytes));
    }
}
