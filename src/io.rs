//! File-based adapter around the core transform.
//!
//! Validates the boundary (key file format, data file size) and converts
//! to/from the `u64` representation the core works in; the core itself
//! stays a pure function of already-validated input.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::DesError;
use crate::hex;

const KEY_FILE_LEN: usize = 17; // 16 hex chars + '\n'
const DATA_BLOCK_LEN: usize = 8;

/// Reads a 17-byte key file (16 hex characters + trailing newline) and
/// returns the key as a `u64`, MSB-first.
pub fn read_key_file(path: &Path) -> Result<u64, DesError> {
    let buf = fs::read(path)?;

    if buf.len() != KEY_FILE_LEN {
        return Err(DesError::KeyFileFormat {
            expected: KEY_FILE_LEN,
            actual: buf.len(),
        });
    }

    let hex_str = std::str::from_utf8(&buf[..16]).map_err(|_| DesError::KeyFileFormat {
        expected: KEY_FILE_LEN,
        actual: buf.len(),
    })?;

    let bytes = hex::decode_block(hex_str)?;
    let key = u64::from_be_bytes(bytes);
    debug!(key = %hex_str, "read key file");
    Ok(key)
}

/// Reads an 8-byte data file (one 64-bit block) and returns it as a `u64`.
pub fn read_data_file(path: &Path) -> Result<u64, DesError> {
    let buf = fs::read(path)?;

    if buf.len() != DATA_BLOCK_LEN {
        return Err(DesError::DataFileFormat {
            expected: DATA_BLOCK_LEN,
            actual: buf.len(),
        });
    }

    let bytes: [u8; 8] = buf.try_into().expect("length checked above");
    let block = u64::from_be_bytes(bytes);
    debug!(block = %hex::encode_block(&bytes), "read data file");
    Ok(block)
}

/// Writes a 64-bit block to `path` as 8 raw bytes.
pub fn write_output_file(path: &Path, block: u64) -> Result<(), DesError> {
    fs::write(path, block.to_be_bytes())?;
    Ok(())
}
