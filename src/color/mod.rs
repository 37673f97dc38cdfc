//! Color model for the 64-color EGA hardware space.
//!
//! This module provides the hardware color type and the distance metrics
//! used to compare colors during quantization.
//!
//! # Color Spaces
//!
//! - [`EgaColor`]: one of the 64 colors the hardware can address (6 bits).
//! - [`Rgba8`]: plain 8-bit RGBA, the interchange format with image loaders
//!   and the presentation layer.
//!
//! # Distance Metrics
//!
//! - [`gamma_distance`]: squared channel differences after a gamma-2.2
//!   decode LUT. Cheap and stable; the quantizer's main metric.
//! - [`linear_distance`]: squared Euclidean distance in proper sRGB-decoded
//!   linear light. Provided as an alternative metric.
//!
//! # Example
//!
//! ```
//! use ega_codec::{closest_ega_color, EgaColor, Rgba8};
//!
//! // Bright white is hardware color 63 (all six bits set)
//! let white = closest_ega_color(Rgba8::opaque(255, 255, 255));
//! assert_eq!(white, EgaColor::new(63).unwrap());
//! assert_eq!(white.to_rgb(), [255, 255, 255]);
//! ```

mod distance;
mod hardware;
mod lut;
mod rgba;

pub use distance::{gamma_distance, linear_distance};
pub use hardware::{closest_ega_color, ColorError, EgaColor, EGA_COLORS};
pub use rgba::Rgba8;
