//! Direction selector for the cipher and its round transformations.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Cipher direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Forward cipher.
    Encrypt,
    /// Inverse cipher.
    Decrypt,
}

impl Mode {
    /// Numeric selector for encryption.
    pub const ENC: u8 = 1;
    /// Numeric selector for decryption.
    pub const DEC: u8 = 0;
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            Self::ENC => Ok(Self::Encrypt),
            Self::DEC => Ok(Self::Decrypt),
            _ => Err(Error::InvalidMode),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enc" | "encrypt" => Ok(Self::Encrypt),
            "dec" | "decrypt" => Ok(Self::Decrypt),
            _ => Err(Error::InvalidMode),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}
