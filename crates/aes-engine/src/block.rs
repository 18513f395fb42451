//! State and word representation helpers.

/// Number of columns in the state (`Nb`). Fixed for every AES variant.
pub const NB: usize = 4;

/// Size of a block in bytes.
pub const BLOCK_LEN: usize = 4 * NB;

/// AES block of 16 bytes, laid out column-major: row `r`, column `c` is at `c * 4 + r`.
pub type Block = [u8; BLOCK_LEN];

/// Four-byte key-schedule word.
pub type Word = [u8; 4];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Byte-wise XOR of two words.
#[inline]
pub fn xor_words(a: &Word, b: &Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Reads column `col` of the state.
#[inline]
pub(crate) fn column(state: &Block, col: usize) -> Word {
    let idx = col * 4;
    [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]]
}

/// Writes column `col` of the state.
#[inline]
pub(crate) fn set_column(state: &mut Block, col: usize, value: Word) {
    state[col * 4..col * 4 + 4].copy_from_slice(&value);
}
