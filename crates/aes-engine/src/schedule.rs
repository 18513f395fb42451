//! Key expansion (FIPS-197 section 5.2).

use crate::block::{xor_words, Word, NB};
use crate::error::{AesError, Result};
use crate::gf::xtime;
use crate::key::{KeySchedule, Variant};
use crate::sbox::sbox;

/// Largest round count of any variant.
const MAX_ROUNDS: usize = 14;

const fn gen_rcon() -> [u8; MAX_ROUNDS] {
    let mut table = [0u8; MAX_ROUNDS];
    let mut value = 0x01u8;
    let mut i = 0;
    while i < MAX_ROUNDS {
        table[i] = value;
        value = xtime(value);
        i += 1;
    }
    table
}

/// Round constants: successive powers of `{02}` starting from `{01}`.
pub(crate) const RCON: [u8; MAX_ROUNDS] = gen_rcon();

fn rot_word(word: Word) -> Word {
    let [a0, a1, a2, a3] = word;
    [a1, a2, a3, a0]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

/// Expands `key` into `Nb * (Nr + 1)` words for `variant`.
pub(crate) fn expand_key(variant: Variant, key: &[u8]) -> Result<KeySchedule> {
    let nk = variant.nk();
    if key.len() != variant.key_len() {
        return Err(AesError::InvalidKeyLength {
            expected: variant.key_len(),
            actual: key.len(),
        });
    }

    let total = variant.schedule_len();
    let mut w: Vec<Word> = Vec::with_capacity(total);
    for chunk in key.chunks_exact(4) {
        w.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        let next = xor_words(&w[i - nk], &temp);
        w.push(next);
    }

    debug_assert_eq!(w.len(), NB * (variant.nr() + 1));
    Ok(KeySchedule::from_words(variant, w))
}
