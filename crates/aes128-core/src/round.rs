//! AES round transformations.
//!
//! Each transformation rewrites the state in place. The direction is chosen by
//! [`Mode`]; `add_round_key` is its own inverse and takes no direction.

use crate::block::{column, row, set_column, set_row, xor_in_place, Block, NB};
use crate::gf::gf_mul;
use crate::mode::Mode;
use crate::sbox::{inv_sbox, sbox};

/// MixColumns coefficients, row by row.
const MIX: [[u8; NB]; NB] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Inverse MixColumns coefficients.
const INV_MIX: [[u8; NB]; NB] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes (or its inverse) to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block, mode: Mode) {
    let lookup = match mode {
        Mode::Encrypt => sbox,
        Mode::Decrypt => inv_sbox,
    };
    for byte in state.iter_mut() {
        *byte = lookup(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` when encrypting
/// and right by `r` when decrypting.
#[inline]
pub fn shift_rows(state: &mut Block, mode: Mode) {
    for r in 1..NB {
        let mut values = row(state, r);
        match mode {
            Mode::Encrypt => values.rotate_left(r),
            Mode::Decrypt => values.rotate_right(r),
        }
        set_row(state, r, values);
    }
}

fn mix_single_column(col: [u8; NB], matrix: &[[u8; NB]; NB]) -> [u8; NB] {
    core::array::from_fn(|r| {
        matrix[r]
            .iter()
            .zip(col.iter())
            .fold(0u8, |acc, (&coeff, &byte)| acc ^ gf_mul(coeff, byte))
    })
}

/// MixColumns (or its inverse) over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block, mode: Mode) {
    let matrix = match mode {
        Mode::Encrypt => &MIX,
        Mode::Decrypt => &INV_MIX,
    };
    for c in 0..NB {
        let mixed = mix_single_column(column(state, c), matrix);
        set_column(state, c, mixed);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
