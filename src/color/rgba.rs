//! 8-bit RGBA color type
//!
//! [`Rgba8`] is the interchange format between the codec and external image
//! loaders / the presentation layer. The packed `u32` key form gives the
//! quantizer a total order for sorting and binary search.

/// A color in plain 8-bit RGBA.
///
/// Alpha is binary as far as the codec is concerned: a pixel participates in
/// encoding iff its alpha is exactly 255 ([`is_opaque`](Self::is_opaque));
/// every other alpha value means transparent. No partial blending exists in
/// the packed format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel; 255 = opaque, anything else = transparent
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black, the decode output for transparent pixels.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Create a new color from all four channels.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    #[inline]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns true if the pixel is fully opaque (alpha == 255).
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Pack into a little-endian `u32` key (`R | G<<8 | B<<16 | A<<24`).
    ///
    /// Used as the sort/search key for the quantizer's distinct-color lookup.
    #[inline]
    pub fn to_raw(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    /// Unpack from the little-endian `u32` key form.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        let [r, g, b, a] = raw.to_le_bytes();
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_is_exact() {
        assert!(Rgba8::opaque(1, 2, 3).is_opaque());
        assert!(!Rgba8::new(1, 2, 3, 254).is_opaque());
        assert!(!Rgba8::new(1, 2, 3, 0).is_opaque());
    }

    #[test]
    fn test_raw_round_trip() {
        let color = Rgba8::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(Rgba8::from_raw(color.to_raw()), color);
        // Byte order: R in the low byte
        assert_eq!(color.to_raw(), 0x7856_3412);
    }

    #[test]
    fn test_raw_order_matches_channel_order() {
        // Keys must order consistently so the quantizer's binary search
        // works on any sorted slice of raw values.
        let a = Rgba8::opaque(1, 0, 0).to_raw();
        let b = Rgba8::opaque(2, 0, 0).to_raw();
        assert!(a < b);
    }
}
