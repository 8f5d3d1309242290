//! Block representation helpers.
//!
//! The state is kept as a flat 16-byte array in column-major order: byte `i`
//! sits at row `i % 4`, column `i / 4`. All row and column addressing goes
//! through the helpers below.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Rows (and columns) of the state matrix.
pub(crate) const NB: usize = 4;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Flat index of the state byte at (`row`, `col`).
#[inline]
pub(crate) const fn index(row: usize, col: usize) -> usize {
    col * NB + row
}

#[inline]
pub(crate) fn column(state: &Block, col: usize) -> [u8; NB] {
    core::array::from_fn(|row| state[index(row, col)])
}

#[inline]
pub(crate) fn set_column(state: &mut Block, col: usize, values: [u8; NB]) {
    for (row, value) in values.into_iter().enumerate() {
        state[index(row, col)] = value;
    }
}

#[inline]
pub(crate) fn row(state: &Block, row: usize) -> [u8; NB] {
    core::array::from_fn(|col| state[index(row, col)])
}

#[inline]
pub(crate) fn set_row(state: &mut Block, row: usize, values: [u8; NB]) {
    for (col, value) in values.into_iter().enumerate() {
        state[index(row, col)] = value;
    }
}
