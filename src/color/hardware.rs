//! The 64-entry EGA hardware color space.
//!
//! Hardware colors are 6-bit values laid out as two interleaved RGB triples:
//! bits 5..3 are the low-intensity r,g,b bits and bits 2..0 the
//! high-intensity R,G,B bits. Each channel's (high, low) pair selects one of
//! four levels {0, 85, 170, 255}, giving the familiar 64-color EGA gamut.

use std::fmt;
use std::sync::OnceLock;

use thiserror::Error;

use super::distance::gamma_distance;
use super::rgba::Rgba8;

/// Number of colors the hardware can address.
pub const EGA_COLORS: usize = 64;

/// Error for hardware color values outside 0..64.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// Value does not fit in the 6-bit hardware color space
    #[error("hardware color {0} out of range (expected 0..64)")]
    OutOfRange(u8),
}

/// One of the 64 fixed colors addressable by the hardware.
///
/// The inner value is guaranteed to be in 0..64; construction through
/// [`EgaColor::new`] is the only public way to make one, so a stored
/// `EgaColor` never needs re-validation.
///
/// # Example
///
/// ```
/// use ega_codec::EgaColor;
///
/// let bright_white = EgaColor::new(63).unwrap();
/// assert_eq!(bright_white.to_rgb(), [255, 255, 255]);
///
/// assert!(EgaColor::new(64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EgaColor(u8);

impl EgaColor {
    /// Create a hardware color from its 6-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] for values >= 64.
    #[inline]
    pub fn new(value: u8) -> Result<Self, ColorError> {
        if (value as usize) < EGA_COLORS {
            Ok(Self(value))
        } else {
            Err(ColorError::OutOfRange(value))
        }
    }

    /// Construct from a table index known to be in range.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < EGA_COLORS);
        Self(index as u8)
    }

    /// The raw 6-bit value.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// The value as a table index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Convert to 8-bit RGB via the fixed hardware table.
    ///
    /// Pure and table-driven; the table is computed once per process.
    #[inline]
    pub fn to_rgb(self) -> [u8; 3] {
        color_table()[self.index()]
    }

    /// Convert to an opaque [`Rgba8`].
    #[inline]
    pub fn to_rgba(self) -> Rgba8 {
        let [r, g, b] = self.to_rgb();
        Rgba8::opaque(r, g, b)
    }
}

impl fmt::Display for EgaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Four-level intensity ramp selected by each channel's (high, low) bit pair.
const LEVEL_RAMP: [u8; 4] = [0, 85, 170, 255];

#[inline]
fn bit(value: u8, pos: u8) -> u8 {
    (value >> pos) & 1
}

fn build_color_table() -> [[u8; 3]; EGA_COLORS] {
    let mut table = [[0u8; 3]; EGA_COLORS];
    for (i, entry) in table.iter_mut().enumerate() {
        let c = i as u8;
        // Bit layout, MSB first: r g b R G B (low triple then high triple)
        let (r, g, b) = (bit(c, 5), bit(c, 4), bit(c, 3));
        let (rr, gg, bb) = (bit(c, 2), bit(c, 1), bit(c, 0));

        *entry = [
            LEVEL_RAMP[((rr << 1) | r) as usize],
            LEVEL_RAMP[((gg << 1) | g) as usize],
            LEVEL_RAMP[((bb << 1) | b) as usize],
        ];
    }
    table
}

/// The shared hardware color table, built on first use.
fn color_table() -> &'static [[u8; 3]; EGA_COLORS] {
    static TABLE: OnceLock<[[u8; 3]; EGA_COLORS]> = OnceLock::new();
    TABLE.get_or_init(build_color_table)
}

/// Find the hardware color closest to `color` under [`gamma_distance`].
///
/// Linear scan over all 64 entries; ties break to the lowest index
/// encountered first. The input's alpha channel is ignored.
///
/// # Example
///
/// ```
/// use ega_codec::{closest_ega_color, Rgba8};
///
/// // A color already on the hardware grid maps to itself
/// let c = closest_ega_color(Rgba8::opaque(255, 85, 0));
/// assert_eq!(c.to_rgb(), [255, 85, 0]);
/// ```
pub fn closest_ega_color(color: Rgba8) -> EgaColor {
    let target = Rgba8::opaque(color.r, color.g, color.b);
    let mut best = EgaColor::from_index(0);
    let mut best_dist = f64::MAX;

    for i in 0..EGA_COLORS {
        let candidate = EgaColor::from_index(i);
        let dist = gamma_distance(candidate.to_rgba(), target);
        if dist < best_dist {
            best_dist = dist;
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(EgaColor::new(0).is_ok());
        assert!(EgaColor::new(63).is_ok());
        assert_eq!(EgaColor::new(64), Err(ColorError::OutOfRange(64)));
        assert_eq!(EgaColor::new(255), Err(ColorError::OutOfRange(255)));
    }

    #[test]
    fn test_table_corners() {
        // Color 0: all bits clear -> black
        assert_eq!(EgaColor::new(0).unwrap().to_rgb(), [0, 0, 0]);
        // Color 63: all bits set -> full white
        assert_eq!(EgaColor::new(63).unwrap().to_rgb(), [255, 255, 255]);
    }

    #[test]
    fn test_bit_decomposition() {
        // Only bit 5 set: low-intensity red bit -> red channel level 1 (85)
        assert_eq!(EgaColor::new(0b100000).unwrap().to_rgb(), [85, 0, 0]);
        // Only bit 2 set: high-intensity red bit -> red channel level 2 (170)
        assert_eq!(EgaColor::new(0b000100).unwrap().to_rgb(), [170, 0, 0]);
        // Both red bits -> level 3 (255)
        assert_eq!(EgaColor::new(0b100100).unwrap().to_rgb(), [255, 0, 0]);
        // Green and blue follow the same pattern one bit down
        assert_eq!(EgaColor::new(0b010010).unwrap().to_rgb(), [0, 255, 0]);
        assert_eq!(EgaColor::new(0b001001).unwrap().to_rgb(), [0, 0, 255]);
    }

    #[test]
    fn test_all_entries_on_ramp() {
        for i in 0..EGA_COLORS {
            let rgb = EgaColor::from_index(i).to_rgb();
            for channel in rgb {
                assert!(
                    LEVEL_RAMP.contains(&channel),
                    "color {i} channel {channel} not on the 4-level ramp"
                );
            }
        }
    }

    #[test]
    fn test_table_has_no_duplicates() {
        for i in 0..EGA_COLORS {
            for j in (i + 1)..EGA_COLORS {
                assert_ne!(
                    EgaColor::from_index(i).to_rgb(),
                    EgaColor::from_index(j).to_rgb(),
                    "colors {i} and {j} decode identically"
                );
            }
        }
    }

    #[test]
    fn test_closest_is_identity_on_grid() {
        // Every hardware color must be its own nearest neighbor
        for i in 0..EGA_COLORS {
            let c = EgaColor::from_index(i);
            assert_eq!(closest_ega_color(c.to_rgba()), c);
        }
    }

    #[test]
    fn test_closest_ignores_alpha() {
        let opaque = closest_ega_color(Rgba8::opaque(200, 10, 10));
        let translucent = closest_ega_color(Rgba8::new(200, 10, 10, 7));
        assert_eq!(opaque, translucent);
    }

    #[test]
    fn test_closest_near_grid_point() {
        // (250, 3, 2) sits next to pure bright red (255, 0, 0)
        let c = closest_ega_color(Rgba8::opaque(250, 3, 2));
        assert_eq!(c.to_rgb(), [255, 0, 0]);
    }
}
