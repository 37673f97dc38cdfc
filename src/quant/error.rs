use thiserror::Error;

/// Error type for quantization.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuantizeError {
    /// Every template slot is marked unused, leaving nothing to quantize
    /// into.
    #[error("palette template has no usable slots")]
    NoUsableSlots,

    /// The pixel buffer does not hold `width * height` pixels.
    #[error("pixel buffer holds {actual} pixels but a {width}x{height} image needs {expected}")]
    BufferSizeMismatch {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
        /// Required buffer length
        expected: usize,
        /// Supplied buffer length
        actual: usize,
    },
}
