//! Error types for palette operations

use thiserror::Error;

/// Error type for palette validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// A raw palette byte does not name a valid hardware color
    #[error("slot {slot}: hardware color {value} out of range (expected 0..64)")]
    InvalidColor {
        /// Slot index the bad value was found in
        slot: usize,
        /// The offending raw byte
        value: u8,
    },
}
