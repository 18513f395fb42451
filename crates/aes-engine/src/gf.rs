//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial (0x11b).
pub const REDUCTION: u8 = 0x1b;

/// Field addition (and subtraction): XOR.
#[inline]
pub const fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplies by `x` (i.e. `{02}`).
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Double-and-add multiplication of two field elements.
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

/// Raises `a` to the power `e` by square-and-multiply.
pub const fn pow(a: u8, mut e: u32) -> u8 {
    let mut base = a;
    let mut acc = 1u8;
    while e != 0 {
        if e & 1 != 0 {
            acc = mul(acc, base);
        }
        base = mul(base, base);
        e >>= 1;
    }
    acc
}

/// Multiplicative inverse, computed as `a^254`. Maps 0 to 0.
#[inline]
pub const fn inv(a: u8) -> u8 {
    pow(a, 254)
}
