//! ega-codec: indexed-color image codec for EGA-class hardware
//!
//! This library models the 64-color EGA hardware space and its 16-slot
//! palettes, packs images into the planar on-disk layout (a 1-bit alpha
//! plane plus a 4-bit color plane), quantizes RGBA images down to a
//! palette, decodes packed bitmaps back to RGBA with caching, and draws
//! clipped primitives directly into the packed planes.
//!
//! # Quick Start
//!
//! The [`EgaEncoder`] builder is the primary entry point:
//!
//! ```
//! use ega_codec::{EgaEncoder, Rgba8};
//!
//! let pixels = vec![Rgba8::opaque(200, 40, 40); 64];
//! let mut encoded = EgaEncoder::new().encode(&pixels, 8, 8).unwrap();
//!
//! assert_eq!(encoded.bitmap.width(), 8);
//! let rgba = encoded.bitmap.decode(&encoded.palette);
//! assert_eq!(rgba.len(), 8 * 8 * 4);
//! ```
//!
//! # Palette Templates
//!
//! Quantization honors a [`PaletteTemplate`]: each of the 16 slots can be
//! pinned to a fixed [`EgaColor`], left free for the quantizer, or
//! excluded outright:
//!
//! ```
//! use ega_codec::{closest_ega_color, EgaEncoder, Rgba8};
//!
//! let black = closest_ega_color(Rgba8::opaque(0, 0, 0));
//! let encoder = EgaEncoder::new().pin(0, black).exclude(15);
//! let pixels = vec![Rgba8::opaque(10, 10, 10); 4];
//! let encoded = encoder.encode(&pixels, 2, 2).unwrap();
//! assert_eq!(encoded.palette.color(0), black);
//! ```
//!
//! # Drawing
//!
//! [`IndexedBitmap`] supports point, line, rectangle, circle, ellipse and
//! text primitives, all clipped to an optional [`Region`]:
//!
//! ```
//! use ega_codec::{IndexedBitmap, Point};
//!
//! let mut bitmap = IndexedBitmap::new(10, 10);
//! bitmap.render_line(Point::new(0, 0), Point::new(4, 0), 3, None);
//! assert_eq!(bitmap.color_at(None, 4, 0), Ok(3));
//! ```

pub mod api;
pub mod bitmap;
pub mod color;
pub mod draw;
pub mod palette;
pub mod quant;

pub use api::{CodecError, EgaEncoder};
pub use bitmap::{BitmapError, IndexedBitmap, Point, Rect, Region};
pub use color::{
    closest_ega_color, gamma_distance, linear_distance, ColorError, EgaColor, Rgba8, EGA_COLORS,
};
pub use draw::{Font, FontError};
pub use palette::{Palette, PaletteError, PaletteTemplate, TemplateSlot, PALETTE_SIZE};
pub use quant::{encode, Encoded, QuantizeError};
