//! Encrypts and decrypts one block with each key size, printing a short trace.

use aes_engine::{Aes, RoundEvent, Step, Variant};

fn main() -> Result<(), aes_engine::AesError> {
    let block = *b"one single block";

    for variant in Variant::ALL {
        let aes = Aes::with_variant(variant);
        let key: Vec<u8> = (0..variant.key_len() as u8).collect();
        let schedule = aes.expand_key(&key)?;

        // Only the state at the start of each round.
        let mut starts = 0usize;
        let mut observer = |event: &RoundEvent<'_>| {
            if event.step == Step::Start {
                starts += 1;
            }
        };
        let ct = aes.encrypt_block_observed(&block, &schedule, &mut observer)?;
        let pt = aes.decrypt_block(&ct, &schedule)?;
        assert_eq!(pt, block);

        println!("{variant}: {starts} rounds, ciphertext {ct:02x?}");
    }
    Ok(())
}
