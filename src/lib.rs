//! QR symbol assembly in pure Rust.
//!
//! Takes an already error-correction-coded payload bitstream plus the
//! symbol parameters (version 1-6 and error correction level) and produces
//! the finished module matrix: fixed function patterns, zig-zag data
//! placement, automatic mask selection by penalty score, BCH-protected
//! format information, and the surrounding quiet zone.
//!
//! ```
//! use qr_symbol::{assemble, ECLevel};
//!
//! let bits = vec![true; 208];
//! let matrix = assemble(&bits, 1, ECLevel::M).unwrap();
//! assert_eq!(matrix.size(), 23); // 21-module grid plus the quiet zone
//! ```
//!
//! Set `QR_SYMBOL_DEBUG=1` in debug builds to trace mask selection.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Symbol assembly pipeline stages.
pub mod encoder;
/// Error types.
pub mod error;
/// Core data models shared across the pipeline.
pub mod models;

mod debug;

pub use encoder::SymbolAssembler;
pub use error::BuildError;
pub use models::{ECLevel, MaskPattern, Module, ModuleMatrix, Version};

/// Assemble a symbol from an error-correction-coded payload bitstream.
pub fn assemble(bits: &[bool], version: u8, ecl: ECLevel) -> Result<ModuleMatrix, BuildError> {
    SymbolAssembler::new(version, ecl)?.assemble(bits)
}

/// Convenience wrapper accepting the payload as a '0'/'1' string.
pub fn assemble_from_str(bits: &str, version: u8, ecl: ECLevel) -> Result<ModuleMatrix, BuildError> {
    assemble(&parse_bits(bits)?, version, ecl)
}

fn parse_bits(bits: &str) -> Result<Vec<bool>, BuildError> {
    bits.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(BuildError::InvalidBit(other)),
        })
        .collect()
}
