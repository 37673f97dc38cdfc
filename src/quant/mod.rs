//! Palette quantization: distilling an RGBA image down to 16 hardware
//! colors and a packed indexed bitmap.

mod candidates;
mod error;
mod quantizer;

pub use error::QuantizeError;
pub use quantizer::{encode, Encoded};
