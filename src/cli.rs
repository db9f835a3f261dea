//! CLI adapter: argument parsing, logging setup, and orchestration of the
//! file I/O boundary around the pure `block::des::Des` transform.

use std::path::PathBuf;

use clap::{Args, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::block::des::Des;
use crate::hex;
use crate::io;

/// Single-block DES reference cipher — a didactic, file-based CLI around
/// a bit-exact implementation of the core transform.
#[derive(Parser, Debug)]
#[command(name = "desref", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub direction: Direction,

    /// Path to the key file: 16 hex characters followed by a newline.
    #[arg(short = 'k', long = "key", value_name = "FILE")]
    pub key: PathBuf,

    /// Path to the data file: exactly one 64-bit block.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// Path to write the result to. If omitted, the block is printed as
    /// hex to stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress diagnostic logging.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Direction {
    /// Encrypt the input block.
    #[arg(short = 'e', long = "encrypt")]
    pub encrypt: bool,

    /// Decrypt the input block.
    #[arg(short = 'd', long = "decrypt")]
    pub decrypt: bool,
}

impl Direction {
    fn is_encrypt(&self) -> bool {
        self.encrypt
    }
}

/// Installs a `tracing` subscriber writing to stdout, unless `quiet` is
/// set — in which case no subscriber is installed and the `tracing`
/// macros compile down to no-ops.
pub fn init_logging(quiet: bool) {
    if quiet {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "desref=info".into()))
        .with_target(false)
        .init();
}

/// Runs one encrypt/decrypt invocation end to end: read key and data
/// files, transform, write (or print) the result.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let direction = if cli.direction.is_encrypt() {
        "encrypt"
    } else {
        "decrypt"
    };
    info!(direction, key_file = %cli.key.display(), data_file = %cli.file.display(), "starting DES transform");

    let key = io::read_key_file(&cli.key)?;
    let block = io::read_data_file(&cli.file)?;
    debug!(key_hex = %hex::encode_block(&key.to_be_bytes()), "key schedule input");

    let cipher = Des::new(key);
    let result = if cli.direction.is_encrypt() {
        cipher.encrypt(block)
    } else {
        cipher.decrypt(block)
    };

    let result_hex = hex::encode_block(&result.to_be_bytes());
    debug!(result = %result_hex, "transform complete");

    match &cli.output {
        Some(path) => {
            io::write_output_file(path, result)?;
            info!(output = %path.display(), "wrote result file");
        }
        None => println!("{result_hex}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn key_file(hex_key: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "{hex_key}").unwrap();
        f
    }

    fn data_file(bytes: &[u8; 8]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f
    }

    #[test]
    fn test_run_encrypt_writes_expected_output_file() {
        let key = key_file("133457799BBCDFF1");
        let data = data_file(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
        let out = NamedTempFile::new().unwrap();

        let cli = Cli {
            direction: Direction {
                encrypt: true,
                decrypt: false,
            },
            key: key.path().to_path_buf(),
            file: data.path().to_path_buf(),
            output: Some(out.path().to_path_buf()),
            quiet: true,
        };

        run(&cli).unwrap();

        let result = io::read_data_file(out.path()).unwrap();
        assert_eq!(result, 0x85E813540F0AB405);
    }

    #[test]
    fn test_run_decrypt_recovers_plaintext() {
        let key = key_file("0E329232EA6D0D73");
        let data = data_file(&[0x00; 8]);
        let out = NamedTempFile::new().unwrap();

        let cli = Cli {
            direction: Direction {
                encrypt: false,
                decrypt: true,
            },
            key: key.path().to_path_buf(),
            file: data.path().to_path_buf(),
            output: Some(out.path().to_path_buf()),
            quiet: true,
        };

        run(&cli).unwrap();

        let result = io::read_data_file(out.path()).unwrap();
        assert_eq!(result, 0x8787878787878787);
    }

    #[test]
    fn test_run_without_output_path_does_not_error() {
        let key = key_file("133457799BBCDFF1");
        let data = data_file(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);

        let cli = Cli {
            direction: Direction {
                encrypt: true,
                decrypt: false,
            },
            key: key.path().to_path_buf(),
            file: data.path().to_path_buf(),
            output: None,
            quiet: true,
        };

        run(&cli).unwrap();
    }
}
