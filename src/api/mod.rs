//! Top-level encoding API and unified error type.

mod encoder;
mod error;

pub use encoder::EgaEncoder;
pub use error::CodecError;
