//! Key types for AES-128.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::Error;

/// Size of an AES-128 cipher key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds for AES-128.
pub const ROUNDS: usize = 10;

/// Size of the expanded key schedule in bytes (11 round keys).
pub const SCHEDULE_SIZE: usize = (ROUNDS + 1) * BLOCK_SIZE;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let key: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength {
                actual: bytes.len(),
            })?;
        Ok(Self(key))
    }
}

impl AsRef<[u8]> for Aes128Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// The whole schedule as one contiguous 176-byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_flattened()
    }
}
