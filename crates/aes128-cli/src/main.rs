//! Command-line interface for `aes128-core`.

#![forbid(unsafe_code)]

use aes128_core::{cipher_block, expand_key, Aes128Key, Block, Mode};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Single-block AES-128 CLI.
#[derive(Parser)]
#[command(name = "aes128", version, author, about = "Single-block AES-128 (FIPS-197)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt one 16-byte block.
    Block {
        /// Direction: `enc`/`encrypt` or `dec`/`decrypt`.
        #[arg(long)]
        mode: String,
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        input_hex: String,
    },
    /// Print the expanded key schedule, one round key per line.
    Schedule {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Run the FIPS-197 known-answer vectors and print the results.
    Kat,
    /// Run a local demo: draw a key and block, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

struct KnownAnswer {
    name: &'static str,
    key: &'static str,
    plaintext: &'static str,
    ciphertext: &'static str,
}

const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "FIPS-197 Appendix B",
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "3243f6a8885a308d313198a2e0370734",
        ciphertext: "3925841d02dc09fbdc118597196a0b32",
    },
    KnownAnswer {
        name: "FIPS-197 Appendix C.1",
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    KnownAnswer {
        name: "all-zero",
        key: "00000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "66e94bd4ef8a2c3b884cfa59ca342b2e",
    },
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Block {
            mode,
            key_hex,
            input_hex,
        } => cmd_block(&mode, &key_hex, &input_hex),
        Commands::Schedule { key_hex } => cmd_schedule(&key_hex),
        Commands::Kat => cmd_kat(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_block(mode: &str, key_hex: &str, input_hex: &str) -> Result<()> {
    let mode: Mode = mode.parse().context("parse mode")?;
    let key = hex::decode(key_hex.trim()).context("decode key hex")?;
    let input = hex::decode(input_hex.trim()).context("decode input hex")?;
    let output = cipher_block(mode, &key, &input).with_context(|| format!("{mode} block"))?;
    println!("{}", hex::encode(output));
    Ok(())
}

fn cmd_schedule(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let round_keys = expand_key(&key);
    for (round, round_key) in round_keys.0.iter().enumerate() {
        println!("round {round:2}: {}", hex::encode(round_key));
    }
    Ok(())
}

fn cmd_kat() -> Result<()> {
    let mut failures = 0usize;
    for vector in KNOWN_ANSWERS {
        let key = hex::decode(vector.key).context("decode vector key")?;
        let plaintext = hex::decode(vector.plaintext).context("decode vector plaintext")?;
        let ciphertext = hex::decode(vector.ciphertext).context("decode vector ciphertext")?;

        let encrypted = cipher_block(Mode::Encrypt, &key, &plaintext)?;
        let decrypted = cipher_block(Mode::Decrypt, &key, &ciphertext)?;
        let passed = encrypted[..] == ciphertext[..] && decrypted[..] == plaintext[..];
        if !passed {
            failures += 1;
        }

        println!("{}", vector.name);
        println!("  key:        {}", vector.key);
        println!("  plaintext:  {}", vector.plaintext);
        println!("  encrypted:  {}", hex::encode(encrypted));
        println!("  decrypted:  {}", hex::encode(decrypted));
        println!("  result:     {}", if passed { "ok" } else { "FAILED" });
    }
    if failures > 0 {
        bail!("{failures} known-answer vector(s) failed");
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 16];
    let mut block: Block = [0u8; 16];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut block);

    let ciphertext = cipher_block(Mode::Encrypt, &key, &block)?;
    let decrypted = cipher_block(Mode::Decrypt, &key, &ciphertext)?;

    println!("demo key: {}", hex::encode(key));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("AES-128 key must be 32 hex characters")
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}
