//! Drawing primitives
//!
//! Region-clipped operations that write directly into the packed planes of
//! an [`IndexedBitmap`](crate::bitmap::IndexedBitmap). All primitives take
//! an optional [`Region`](crate::bitmap::Region) (`None` = full bitmap),
//! offset coordinates by the region origin, and silently drop anything
//! outside the clip; out-of-bounds drawing is never an error.
//!
//! Rasterization rules (outline primitives are not anti-aliased):
//!
//! - lines walk the major axis one pixel at a time, accumulating the minor
//!   axis by slope with truncation; both endpoints are always plotted
//! - circles and ellipses use the midpoint algorithms, outline only
//! - filled rects cover `width x height` pixels from their corner
//!
//! Text comes from a [`Font`]: a 256-glyph 2-color sheet bitmap paired
//! with foreground/background palette colors.

mod primitives;
mod text;

pub use text::{Font, FontError};
