//! Palette types and utilities
//!
//! A [`Palette`] is the resolved 16-slot mapping from packed pixel nibbles
//! to hardware colors. A [`PaletteTemplate`] is the authoring-time form fed
//! to the quantizer, where each slot may be pinned to a color, left free,
//! or excluded from the output entirely.

mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, PaletteTemplate, TemplateSlot, PALETTE_SIZE};
