//! Gamma lookup table access functions
//!
//! This module provides fast channel decoding using pre-computed lookup
//! tables generated at compile time by build.rs. Both tables are indexed
//! directly by the 8-bit channel value, so no interpolation is needed.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode an 8-bit channel value through the gamma-2.2 curve.
///
/// Returns `(value / 255)^2.2` in 0.0..=1.0.
#[inline]
pub fn gamma_decode(value: u8) -> f64 {
    GAMMA_DECODE[value as usize]
}

/// Decode an 8-bit channel value through the IEC 61966-2-1 sRGB transfer
/// function.
///
/// Returns linear light in 0.0..=1.0.
#[inline]
pub fn srgb_decode(value: u8) -> f64 {
    SRGB_DECODE[value as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_decode_boundaries() {
        assert!((gamma_decode(0) - 0.0).abs() < 1e-12);
        assert!((gamma_decode(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_srgb_decode_boundaries() {
        assert!((srgb_decode(0) - 0.0).abs() < 1e-12);
        assert!((srgb_decode(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_values() {
        // (128/255)^2.2 = 0.2195...
        assert!((gamma_decode(128) - (128.0f64 / 255.0).powf(2.2)).abs() < 1e-12);

        // sRGB 128 -> linear ~0.2158 (exact: ((128/255 + 0.055)/1.055)^2.4)
        let expected = ((128.0 / 255.0 + 0.055f64) / 1.055).powf(2.4);
        assert!((srgb_decode(128) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_monotonicity() {
        // Both decode curves must be strictly increasing over 0..=255
        for i in 1..=255u8 {
            assert!(
                gamma_decode(i) > gamma_decode(i - 1),
                "gamma_decode not monotonic at {i}"
            );
            assert!(
                srgb_decode(i) > srgb_decode(i - 1),
                "srgb_decode not monotonic at {i}"
            );
        }
    }

    #[test]
    fn test_curves_differ_at_midtones() {
        // Gamma 2.2 is an approximation of the sRGB transfer function; the
        // two must agree at the endpoints but differ in the midtones.
        assert!((gamma_decode(128) - srgb_decode(128)).abs() > 1e-4);
    }
}
