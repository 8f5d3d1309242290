//! AES-128 key schedule and block encryption/decryption.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{Error, Result};
use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, ROUNDS};
use crate::mode::Mode;
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::{rcon, sbox};

type Word = [u8; 4];

/// Words in the expanded schedule.
const SCHEDULE_WORDS: usize = 4 * (ROUNDS + 1);
/// Words in the cipher key.
const NK: usize = KEY_SIZE / 4;

fn rot_word(word: Word) -> Word {
    let [a0, a1, a2, a3] = word;
    [a1, a2, a3, a0]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(lhs: Word, rhs: Word) -> Word {
    core::array::from_fn(|i| lhs[i] ^ rhs[i])
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [[0u8; 4]; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in NK..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= rcon(i / NK);
        }
        w[i] = xor_word(w[i - NK], temp);
    }

    let mut round_keys = [[0u8; BLOCK_SIZE]; ROUNDS + 1];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(word);
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state, Mode::Encrypt);
        shift_rows(&mut state, Mode::Encrypt);
        mix_columns(&mut state, Mode::Encrypt);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state, Mode::Encrypt);
    shift_rows(&mut state, Mode::Encrypt);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(ROUNDS));
    for round in (1..ROUNDS).rev() {
        shift_rows(&mut state, Mode::Decrypt);
        sub_bytes(&mut state, Mode::Decrypt);
        add_round_key(&mut state, round_keys.get(round));
        mix_columns(&mut state, Mode::Decrypt);
    }
    shift_rows(&mut state, Mode::Decrypt);
    sub_bytes(&mut state, Mode::Decrypt);
    add_round_key(&mut state, round_keys.get(0));

    state
}

/// Runs one AES-128 block operation on caller-supplied byte slices.
///
/// The key and input lengths are checked before anything else happens; the
/// key is then expanded once and the block is encrypted or decrypted
/// according to `mode`. No state is carried between calls.
pub fn cipher_block(mode: Mode, key: &[u8], input: &[u8]) -> Result<Block> {
    let key = Aes128Key::try_from(key)?;
    let block: Block = input.try_into().map_err(|_| Error::InvalidBlockLength {
        actual: input.len(),
    })?;

    let round_keys = expand_key(&key);
    Ok(match mode {
        Mode::Encrypt => encrypt_block(&block, &round_keys),
        Mode::Decrypt => decrypt_block(&block, &round_keys),
    })
}
