//! AES round transformations on the column-major state.

use crate::block::{column, set_column, xor_in_place, Block, Word};
use crate::gf::mul;
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions. Row 0 stays put.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = src[((col + row) % 4) * 4 + row];
        }
    }
}

/// Rotates row `r` right by `r` positions, undoing [`shift_rows`].
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[((col + row) % 4) * 4 + row] = src[col * 4 + row];
        }
    }
}

// Circulant rows: each output byte is sum(coeffs[(j - i) mod 4] * a[j]).
const FORWARD: [u8; 4] = [0x02, 0x03, 0x01, 0x01];
const INVERSE: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];

fn mix_single_column(col: Word, coeffs: &[u8; 4]) -> Word {
    core::array::from_fn(|i| {
        (0..4).fold(0u8, |acc, j| acc ^ mul(coeffs[(j + 4 - i) % 4], col[j]))
    })
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in 0..4 {
        let mixed = mix_single_column(column(state, col), &FORWARD);
        set_column(state, col, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for col in 0..4 {
        let mixed = mix_single_column(column(state, col), &INVERSE);
        set_column(state, col, mixed);
    }
}

/// Adds (XORs) a round key into the state. Applying it twice restores the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_states(count: usize) -> Vec<Block> {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        (0..count)
            .map(|_| {
                let mut s = [0u8; 16];
                rng.fill_bytes(&mut s);
                s
            })
            .collect()
    }

    #[test]
    fn shift_rows_moves_expected_bytes() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
        inv_shift_rows(&mut state);
        assert_eq!(state, core::array::from_fn::<u8, 16, _>(|i| i as u8));
    }

    #[test]
    fn mix_columns_known_column() {
        // Common test column db 13 53 45 -> 8e 4d a1 bc.
        let mut state = [0u8; 16];
        state[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        state[4..8].copy_from_slice(&[0xf2, 0x0a, 0x22, 0x5c]);
        state[8..12].copy_from_slice(&[0x01, 0x01, 0x01, 0x01]);
        state[12..].copy_from_slice(&[0xc6, 0xc6, 0xc6, 0xc6]);
        mix_columns(&mut state);
        assert_eq!(&state[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(&state[4..8], &[0x9f, 0xdc, 0x58, 0x9d]);
        assert_eq!(&state[8..12], &[0x01, 0x01, 0x01, 0x01]);
        assert_eq!(&state[12..], &[0xc6, 0xc6, 0xc6, 0xc6]);
    }

    #[test]
    fn forward_column_matches_explicit_formula() {
        for s in random_states(32) {
            let [c0, c1, c2, c3] = column(&s, 0);
            let mixed = mix_single_column([c0, c1, c2, c3], &FORWARD);
            assert_eq!(mixed[0], mul(2, c0) ^ mul(3, c1) ^ c2 ^ c3);
            assert_eq!(mixed[1], c0 ^ mul(2, c1) ^ mul(3, c2) ^ c3);
            assert_eq!(mixed[2], c0 ^ c1 ^ mul(2, c2) ^ mul(3, c3));
            assert_eq!(mixed[3], mul(3, c0) ^ c1 ^ c2 ^ mul(2, c3));
        }
    }

    #[test]
    fn inverse_column_matches_explicit_formula() {
        for s in random_states(32) {
            let [c0, c1, c2, c3] = column(&s, 1);
            let mixed = mix_single_column([c0, c1, c2, c3], &INVERSE);
            assert_eq!(
                mixed[0],
                mul(0x0e, c0) ^ mul(0x0b, c1) ^ mul(0x0d, c2) ^ mul(0x09, c3)
            );
            assert_eq!(
                mixed[1],
                mul(0x09, c0) ^ mul(0x0e, c1) ^ mul(0x0b, c2) ^ mul(0x0d, c3)
            );
            assert_eq!(
                mixed[2],
                mul(0x0d, c0) ^ mul(0x09, c1) ^ mul(0x0e, c2) ^ mul(0x0b, c3)
            );
            assert_eq!(
                mixed[3],
                mul(0x0b, c0) ^ mul(0x0d, c1) ^ mul(0x09, c2) ^ mul(0x0e, c3)
            );
        }
    }

    #[test]
    fn primitives_invert() {
        for original in random_states(64) {
            let mut s = original;
            shift_rows(&mut s);
            inv_shift_rows(&mut s);
            assert_eq!(s, original);

            mix_columns(&mut s);
            inv_mix_columns(&mut s);
            assert_eq!(s, original);

            sub_bytes(&mut s);
            inv_sub_bytes(&mut s);
            assert_eq!(s, original);

            let key = [0x3c; 16];
            add_round_key(&mut s, &key);
            assert_ne!(s, original);
            add_round_key(&mut s, &key);
            assert_eq!(s, original);
        }
    }
}
