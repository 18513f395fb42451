//! Command-line interface for `aes-engine` and `shift-cipher`.

#![forbid(unsafe_code)]

use aes_engine::{Aes, Block, KeySchedule, RoundEvent, Variant};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use shift_cipher::ShiftCipher;

/// AES block cipher CLI.
#[derive(Parser)]
#[command(name = "aes", version, author, about = "AES-128/192/256 single-block cipher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the expanded key schedule, one word per line.
    Expand {
        /// Cipher key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Key size in bits; inferred from the key when omitted.
        #[arg(long)]
        bits: Option<usize>,
    },
    /// Encrypt a single 16-byte block.
    Enc {
        /// Cipher key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Key size in bits; inferred from the key when omitted.
        #[arg(long)]
        bits: Option<usize>,
        /// Print every intermediate state in FIPS-197 Appendix C format.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Decrypt a single 16-byte block.
    Dec {
        /// Cipher key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Key size in bits; inferred from the key when omitted.
        #[arg(long)]
        bits: Option<usize>,
        /// Print every intermediate state in FIPS-197 Appendix C format.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Verify known-answer vectors and random round trips for every key size.
    Check {
        /// Number of random round trips per key size.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key and block, encrypt, decrypt back.
    Demo {
        /// Key size in bits.
        #[arg(long, default_value_t = 128)]
        bits: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Shift (Caesar) cipher over the letters A-Z.
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },
}

#[derive(Subcommand)]
enum ShiftAction {
    /// Encrypt text; input is uppercased and non-letters are dropped.
    Enc {
        /// Shift amount in 0..=25.
        #[arg(long)]
        key: u8,
        /// Message to encrypt.
        #[arg(long)]
        text: String,
    },
    /// Decrypt text.
    Dec {
        /// Shift amount in 0..=25.
        #[arg(long)]
        key: u8,
        /// Message to decrypt.
        #[arg(long)]
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Expand { key_hex, bits } => cmd_expand(&key_hex, bits),
        Commands::Enc {
            key_hex,
            block_hex,
            bits,
            trace,
        } => cmd_block(&key_hex, &block_hex, bits, trace, Mode::Encrypt),
        Commands::Dec {
            key_hex,
            block_hex,
            bits,
            trace,
        } => cmd_block(&key_hex, &block_hex, bits, trace, Mode::Decrypt),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { bits, seed } => cmd_demo(bits, seed),
        Commands::Shift { action } => cmd_shift(action),
    }
}

#[derive(Clone, Copy)]
enum Mode {
    Encrypt,
    Decrypt,
}

fn cmd_expand(key_hex: &str, bits: Option<usize>) -> Result<()> {
    let (aes, schedule) = load_key(key_hex, bits)?;
    println!("{}", aes.variant());
    for (i, word) in schedule.words().iter().enumerate() {
        println!("w[{i:2}] = {}", hex::encode(word));
    }
    Ok(())
}

fn cmd_block(
    key_hex: &str,
    block_hex: &str,
    bits: Option<usize>,
    trace: bool,
    mode: Mode,
) -> Result<()> {
    let (aes, schedule) = load_key(key_hex, bits)?;
    let block = hex::decode(block_hex.trim()).context("decode block hex")?;

    let mut print_event = |event: &RoundEvent<'_>| println!("{}", trace_line(event));
    let mut silent = |_: &RoundEvent<'_>| {};
    let observer: &mut dyn FnMut(&RoundEvent<'_>) = if trace {
        &mut print_event
    } else {
        &mut silent
    };

    let out = match mode {
        Mode::Encrypt => aes.encrypt_block_observed(&block, &schedule, observer),
        Mode::Decrypt => aes.decrypt_block_observed(&block, &schedule, observer),
    }
    .context("process block")?;

    println!("{}", hex::encode(out));
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    // FIPS-197 Appendix C.1 - C.3.
    const KNOWN: [(&str, &str, &str); 3] = [
        (
            "000102030405060708090a0b0c0d0e0f",
            "00112233445566778899aabbccddeeff",
            "69c4e0d86a7b0430d8cdb78070b4c55a",
        ),
        (
            "000102030405060708090a0b0c0d0e0f1011121314151617",
            "00112233445566778899aabbccddeeff",
            "dda97ca4864cdfe06eaf70a0ec0d7191",
        ),
        (
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            "00112233445566778899aabbccddeeff",
            "8ea2b7ca516745bfeafc49904b496089",
        ),
    ];

    for (key_hex, plain_hex, cipher_hex) in KNOWN {
        let (aes, schedule) = load_key(key_hex, None)?;
        let plain = hex::decode(plain_hex)?;
        let ct = aes.encrypt_block(&plain, &schedule)?;
        if hex::encode(ct) != cipher_hex {
            bail!("{} known-answer encryption mismatch", aes.variant());
        }
        if aes.decrypt_block(&ct, &schedule)?[..] != plain[..] {
            bail!("{} known-answer decryption mismatch", aes.variant());
        }
    }

    let mut rng = seeded_rng(seed);
    for variant in Variant::ALL {
        let aes = Aes::with_variant(variant);
        for _ in 0..samples {
            let (schedule, block) = random_inputs(&aes, &mut rng)?;
            let ct = aes.encrypt_block(&block, &schedule)?;
            if aes.decrypt_block(&ct, &schedule)? != block {
                bail!("{variant} round trip failed");
            }
        }
        println!("{variant}: ok ({samples} random blocks)");
    }
    Ok(())
}

fn cmd_demo(bits: usize, seed: Option<u64>) -> Result<()> {
    let aes = Aes::new(bits)?;
    let mut rng = seeded_rng(seed);
    let mut key = vec![0u8; aes.variant().key_len()];
    rng.fill_bytes(&mut key);
    let schedule = aes.expand_key(&key)?;
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let ciphertext = aes.encrypt_block(&block, &schedule)?;
    let decrypted = aes.decrypt_block(&ciphertext, &schedule)?;

    println!("variant: {}", aes.variant());
    println!("demo key: {}", hex::encode(&key));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn cmd_shift(action: ShiftAction) -> Result<()> {
    let output = match action {
        ShiftAction::Enc { key, text } => ShiftCipher::new(key)?.encrypt_message(&text),
        ShiftAction::Dec { key, text } => ShiftCipher::new(key)?.decrypt_message(&text),
    };
    println!("{output}");
    Ok(())
}

fn load_key(key_hex: &str, bits: Option<usize>) -> Result<(Aes, KeySchedule)> {
    let key = hex::decode(key_hex.trim()).context("decode key hex")?;
    let aes = match bits {
        Some(bits) => Aes::new(bits)?,
        None => Aes::with_variant(
            Variant::from_key_len(key.len())
                .context("key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters)")?,
        ),
    };
    let schedule = aes
        .expand_key(&key)
        .with_context(|| format!("expand {} key", aes.variant()))?;
    Ok((aes, schedule))
}

fn trace_line(event: &RoundEvent<'_>) -> String {
    format!(
        "round[{:2}].{:<9}{}",
        event.round,
        event.label(),
        hex::encode(event.bytes)
    )
}

fn random_inputs(aes: &Aes, rng: &mut impl RngCore) -> Result<(KeySchedule, Block)> {
    let mut key = vec![0u8; aes.variant().key_len()];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut block);
    Ok((aes.expand_key(&key)?, block))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}
