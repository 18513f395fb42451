//! Forward and inverse AES S-boxes.
//!
//! Both tables are derived at compile time from GF(2^8) inversion followed by
//! the FIPS-197 affine map. The `const` assertion below rejects the build if
//! either table stops being a permutation or the two stop being inverses.

use crate::gf;

const AFFINE_CONSTANT: u8 = 0x63;

const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ AFFINE_CONSTANT
}

const fn gen_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(gf::inv(i as u8));
        i += 1;
    }
    table
}

const fn gen_inv_sbox(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[forward[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const fn is_permutation(table: &[u8; 256]) -> bool {
    let mut seen = [false; 256];
    let mut i = 0;
    while i < 256 {
        let v = table[i] as usize;
        if seen[v] {
            return false;
        }
        seen[v] = true;
        i += 1;
    }
    true
}

const fn are_inverses(forward: &[u8; 256], inverse: &[u8; 256]) -> bool {
    let mut i = 0;
    while i < 256 {
        if inverse[forward[i] as usize] as usize != i || forward[inverse[i] as usize] as usize != i
        {
            return false;
        }
        i += 1;
    }
    true
}

/// Forward substitution table used by SubBytes and SubWord.
pub const SBOX: [u8; 256] = gen_sbox();

/// Inverse substitution table used by InvSubBytes.
pub const INV_SBOX: [u8; 256] = gen_inv_sbox(&SBOX);

const _: () = assert!(
    is_permutation(&SBOX) && is_permutation(&INV_SBOX) && are_inverses(&SBOX, &INV_SBOX),
    "S-box tables are not mutually inverse permutations"
);

/// Forward S-box lookup.
#[inline]
pub const fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Inverse S-box lookup.
#[inline]
pub const fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}
