//! Error types for bitmap access

use thiserror::Error;

/// Error type for bitmap reads and decode operations.
///
/// Drawing primitives never error, they clip. Errors exist only where the
/// caller asked for a specific pixel or supplied a specific buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BitmapError {
    /// Pixel coordinate outside the addressed region or bitmap
    #[error("pixel ({x}, {y}) outside {width}x{height}")]
    OutOfBounds {
        /// Requested x (region-local)
        x: u32,
        /// Requested y (region-local)
        y: u32,
        /// Extent width the coordinate was checked against
        width: u32,
        /// Extent height the coordinate was checked against
        height: u32,
    },

    /// Decode target buffer does not match the bitmap's dimensions
    #[error("decode target size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Required buffer length (`width * height * 4`)
        expected: usize,
        /// Supplied buffer length
        actual: usize,
    },
}
