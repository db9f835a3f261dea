use thiserror::Error;

use crate::hex::InvalidHexDigit;

/// Failures that can occur at the file I/O boundary.
///
/// The core transform (`block::des::Des`) never produces any of these —
/// once a key and block are validated, the cipher itself is infallible.
#[derive(Debug, Error)]
pub enum DesError {
    #[error("key file must be exactly {expected} bytes (16 hex characters + newline), got {actual}")]
    KeyFileFormat { expected: usize, actual: usize },

    #[error("key file does not contain valid hex: {0}")]
    InvalidHex(#[from] InvalidHexDigit),

    #[error("data file must be exactly {expected} bytes (one 64-bit block), got {actual}")]
    DataFileFormat { expected: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
