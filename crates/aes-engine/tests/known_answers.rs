//! Published FIPS-197 and SP 800-38A vectors for all three key sizes.

use aes_engine::{Aes, AesError, Block, Step, Variant};

struct Vector {
    key: &'static str,
    plain: &'static str,
    cipher: &'static str,
}

// FIPS-197 Appendix C.
const APPENDIX_C: [Vector; 3] = [
    Vector {
        key: "000102030405060708090a0b0c0d0e0f",
        plain: "00112233445566778899aabbccddeeff",
        cipher: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    Vector {
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plain: "00112233445566778899aabbccddeeff",
        cipher: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    Vector {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plain: "00112233445566778899aabbccddeeff",
        cipher: "8ea2b7ca516745bfeafc49904b496089",
    },
];

// SP 800-38A F.1, first ECB block.
const SP800_38A: [Vector; 3] = [
    Vector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plain: "6bc1bee22e409f96e93d7e117393172a",
        cipher: "3ad77bb40d7a3660a89ecaf32466ef97",
    },
    Vector {
        key: "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        plain: "6bc1bee22e409f96e93d7e117393172a",
        cipher: "bd334f1d6e45f25ff712a214571fa5cc",
    },
    Vector {
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        plain: "6bc1bee22e409f96e93d7e117393172a",
        cipher: "f3eed1bdb5d2a03c064b5a7e3db181f8",
    },
];

fn bytes(s: &str) -> Vec<u8> {
    hex::decode(s).expect("test vector hex")
}

fn check(vectors: &[Vector]) {
    for v in vectors {
        let key = bytes(v.key);
        let variant = Variant::from_key_len(key.len()).expect("vector key length");
        let aes = Aes::with_variant(variant);
        let schedule = aes.expand_key(&key).expect("vector key");

        let ct = aes.encrypt_block(&bytes(v.plain), &schedule).expect("encrypt");
        assert_eq!(hex::encode(ct), v.cipher, "{variant} encrypt");

        let pt = aes.decrypt_block(&ct, &schedule).expect("decrypt");
        assert_eq!(hex::encode(pt), v.plain, "{variant} decrypt");
    }
}

#[test]
fn fips197_appendix_c() {
    check(&APPENDIX_C);
}

#[test]
fn sp800_38a_ecb_first_block() {
    check(&SP800_38A);
}

#[test]
fn fips197_appendix_a_key_expansion() {
    // (key, bits, index, word) samples from Appendix A.1 - A.3.
    let samples = [
        (SP800_38A[0].key, 128, 4, "a0fafe17"),
        (SP800_38A[0].key, 128, 43, "b6630ca6"),
        (SP800_38A[1].key, 192, 6, "fe0c91f7"),
        (SP800_38A[1].key, 192, 51, "01002202"),
        (SP800_38A[2].key, 256, 8, "9ba35411"),
        (SP800_38A[2].key, 256, 59, "706c631e"),
    ];
    for (key, bits, index, word) in samples {
        let aes = Aes::new(bits).expect("supported size");
        let schedule = aes.expand_key(&bytes(key)).expect("sized key");
        assert_eq!(schedule.len(), aes.variant().schedule_len());
        let actual = schedule.word(index).expect("index in range");
        assert_eq!(hex::encode(actual), word, "AES-{bits} w[{index}]");
    }
}

#[test]
fn appendix_c2_inverse_cipher_trace() {
    let v = &APPENDIX_C[1];
    let aes = Aes::new(192).expect("supported size");
    let schedule = aes.expand_key(&bytes(v.key)).expect("sized key");
    let mut recorder = aes_engine::Recorder::default();
    let pt = aes
        .decrypt_block_observed(&bytes(v.cipher), &schedule, &mut recorder)
        .expect("decrypt");
    assert_eq!(hex::encode(pt), v.plain);

    let hexed = |b: Option<&Block>| b.map(hex::encode);
    // round[ 1].istart 793e76979c3403e9aab7b2d10fa96ccc
    assert_eq!(
        hexed(recorder.find(1, Step::Start)).as_deref(),
        Some("793e76979c3403e9aab7b2d10fa96ccc")
    );
    assert_eq!(hexed(recorder.find(12, Step::Output)).as_deref(), Some(v.plain));
}

#[test]
fn mis_sized_inputs_never_produce_output() {
    let aes = Aes::new(256).expect("supported size");
    assert_eq!(
        aes.expand_key(&[0u8; 16]).map(|_| ()),
        Err(AesError::InvalidKeyLength {
            expected: 32,
            actual: 16,
        })
    );
    let schedule = aes.expand_key(&[0u8; 32]).expect("sized key");
    assert_eq!(
        aes.encrypt_block(&[0u8; 8], &schedule),
        Err(AesError::InvalidBlockLength { actual: 8 })
    );
    assert!(Aes::new(512).is_err());
}
