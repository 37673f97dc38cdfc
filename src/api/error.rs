use thiserror::Error;

use crate::bitmap::BitmapError;
use crate::color::ColorError;
use crate::palette::PaletteError;
use crate::quant::QuantizeError;

/// Unified error type for the crate's top-level API.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Quantization failed
    #[error(transparent)]
    Quantize(#[from] QuantizeError),

    /// Bitmap access failed
    #[error(transparent)]
    Bitmap(#[from] BitmapError),

    /// Palette construction failed
    #[error(transparent)]
    Palette(#[from] PaletteError),

    /// A hardware color value was out of range
    #[error(transparent)]
    Color(#[from] ColorError),
}
