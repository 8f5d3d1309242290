//! Single-block AES-128 as described in FIPS-197.
//!
//! This crate provides:
//! - The S-box, inverse S-box and round constant tables.
//! - Multiplication in GF(2^8).
//! - Key schedule for AES-128.
//! - The four round transformations, each parameterized by [`Mode`].
//! - Single-block encryption and decryption, plus the checked entry point
//!   [`cipher_block`] for callers holding raw byte slices.
//!
//! All tables are immutable statics and every call owns its own state and
//! round keys, so the functions here can be called from any number of
//! threads at once. The implementation aims for clarity and testability
//! rather than constant-time guarantees; it should not be treated as
//! side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod mode;
mod round;
mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{cipher_block, decrypt_block, encrypt_block, expand_key};
pub use crate::error::{Error, Result};
pub use crate::gf::{gf_mul, xtime};
pub use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, ROUNDS, SCHEDULE_SIZE};
pub use crate::mode::Mode;
pub use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
pub use crate::sbox::{inv_sbox, rcon, sbox};
