//! Error type for cipher calls.

use thiserror::Error;

/// Caller contract violations, reported before any transformation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The cipher key was not exactly 16 bytes.
    #[error("invalid key length: expected 16 bytes, got {actual}")]
    InvalidKeyLength {
        /// Length that was supplied.
        actual: usize,
    },

    /// The input block was not exactly 16 bytes.
    #[error("invalid block length: expected 16 bytes, got {actual}")]
    InvalidBlockLength {
        /// Length that was supplied.
        actual: usize,
    },

    /// The mode selector named neither encryption nor decryption.
    #[error("invalid mode: expected encrypt or decrypt")]
    InvalidMode,
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
