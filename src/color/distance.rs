//! Perceptual distance metrics.
//!
//! Two metrics over RGB (alpha never participates):
//!
//! - [`gamma_distance`]: squared channel differences after a gamma-2.2
//!   decode. Not perceptually linear, but cheap, stable, and fully
//!   precomputable; this is the metric the quantizer runs on.
//! - [`linear_distance`]: squared Euclidean distance in sRGB-decoded linear
//!   light (the proper IEC 61966-2-1 transfer function, not the 2.2
//!   power-law approximation).

use super::lut::{gamma_decode, srgb_decode};
use super::rgba::Rgba8;

/// Squared distance between two colors in gamma-2.2 decoded space.
///
/// Summed over R, G, B; alpha is ignored.
#[inline]
pub fn gamma_distance(a: Rgba8, b: Rgba8) -> f64 {
    let dr = gamma_decode(a.r) - gamma_decode(b.r);
    let dg = gamma_decode(a.g) - gamma_decode(b.g);
    let db = gamma_decode(a.b) - gamma_decode(b.b);
    dr * dr + dg * dg + db * db
}

/// Squared Euclidean distance between two colors in linear light.
///
/// Summed over R, G, B; alpha is ignored.
#[inline]
pub fn linear_distance(a: Rgba8, b: Rgba8) -> f64 {
    let dr = srgb_decode(a.r) - srgb_decode(b.r);
    let dg = srgb_decode(a.g) - srgb_decode(b.g);
    let db = srgb_decode(a.b) - srgb_decode(b.b);
    dr * dr + dg * dg + db * db
}
