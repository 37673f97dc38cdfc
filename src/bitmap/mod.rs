//! Packed bitmap store
//!
//! [`IndexedBitmap`] owns the two bit-packed planes of the hardware image
//! format, a 1-bit-per-pixel alpha plane and a 4-bit-per-pixel color
//! plane, plus the decode cache that turns (bitmap, palette) back into
//! RGBA on demand.
//!
//! Every read and draw call takes an optional [`Region`] (origin + extent);
//! `None` means the full bitmap.

mod error;
mod indexed;
mod region;

pub use error::BitmapError;
pub use indexed::IndexedBitmap;
pub use region::{Point, Rect, Region};
