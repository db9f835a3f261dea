//! A bit-exact, didactic implementation of the Data Encryption Standard
//! for a single 64-bit block.
//!
//! [`block::des::Des`] is the core: key schedule, sixteen-round Feistel
//! network, and the inverse initial permutation, each a directly
//! inspectable computation rather than an optimized table lookup. The
//! rest of the crate (`cli`, `io`, `error`) is the file-based adapter
//! around it — the core itself is a pure `u64 -> u64` function once the
//! key schedule has run.

pub mod block;
pub mod cli;
pub mod error;
pub mod hex;
pub mod io;

pub use block::des::Des;
pub use error::DesError;
