//! The 16-slot palette and its authoring-time template form.

use super::error::PaletteError;
use crate::color::EgaColor;

/// Number of slots in a palette.
pub const PALETTE_SIZE: usize = 16;

/// A resolved palette: 16 hardware colors, one per packed pixel nibble.
///
/// `Palette` is a plain value type: freely copied, compared byte-for-byte
/// (the decode cache relies on that), and convertible to/from its raw
/// 16-byte persisted form.
///
/// Sentinel slot states (free / excluded) exist only on
/// [`PaletteTemplate`]; a resolved palette always holds valid hardware
/// colors in every slot.
///
/// # Example
///
/// ```
/// use ega_codec::{EgaColor, Palette};
///
/// let mut palette = Palette::default();
/// palette.set(1, EgaColor::new(63).unwrap());
/// assert_eq!(palette.color(1).to_rgb(), [255, 255, 255]);
/// assert_eq!(palette.to_bytes()[1], 63);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    colors: [EgaColor; PALETTE_SIZE],
}

impl Palette {
    /// Create a palette from 16 hardware colors.
    #[inline]
    pub fn new(colors: [EgaColor; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// The hardware color in the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= 16`.
    #[inline]
    pub fn color(&self, slot: usize) -> EgaColor {
        self.colors[slot]
    }

    /// Replace the hardware color in the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= 16`.
    #[inline]
    pub fn set(&mut self, slot: usize, color: EgaColor) {
        self.colors[slot] = color;
    }

    /// All 16 slots in order.
    #[inline]
    pub fn colors(&self) -> &[EgaColor; PALETTE_SIZE] {
        &self.colors
    }

    /// The raw 16-byte value used for persistence.
    ///
    /// Any binary container format can carry this; the codec itself does
    /// not define one.
    pub fn to_bytes(&self) -> [u8; PALETTE_SIZE] {
        let mut bytes = [0u8; PALETTE_SIZE];
        for (byte, color) in bytes.iter_mut().zip(self.colors.iter()) {
            *byte = color.value();
        }
        bytes
    }

    /// Rebuild a palette from its raw 16-byte persisted value.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColor`] if any byte is >= 64.
    pub fn from_bytes(bytes: [u8; PALETTE_SIZE]) -> Result<Self, PaletteError> {
        let mut colors = [EgaColor::default(); PALETTE_SIZE];
        for (slot, (&value, color)) in bytes.iter().zip(colors.iter_mut()).enumerate() {
            *color = EgaColor::new(value)
                .map_err(|_| PaletteError::InvalidColor { slot, value })?;
        }
        Ok(Self { colors })
    }
}

/// One slot of a [`PaletteTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateSlot {
    /// Slot is pinned to this hardware color; quantization must keep it.
    Color(EgaColor),
    /// Slot content is chosen freely by quantization.
    #[default]
    Undefined,
    /// Slot is excluded from the output palette.
    Unused,
}

/// The quantizer's palette input: 16 slots, each pinned, free, or excluded.
///
/// # Example
///
/// ```
/// use ega_codec::{EgaColor, PaletteTemplate};
///
/// // All slots free except slot 0 pinned to black and slot 15 excluded
/// let template = PaletteTemplate::free()
///     .pin(0, EgaColor::new(0).unwrap())
///     .exclude(15);
/// assert_eq!(template.usable_slots(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteTemplate {
    slots: [TemplateSlot; PALETTE_SIZE],
}

impl PaletteTemplate {
    /// A template with every slot free for quantization to fill.
    #[inline]
    pub fn free() -> Self {
        Self::default()
    }

    /// A template from explicit slot states.
    #[inline]
    pub fn new(slots: [TemplateSlot; PALETTE_SIZE]) -> Self {
        Self { slots }
    }

    /// A template with every slot pinned to the corresponding palette color.
    pub fn pinned(palette: &Palette) -> Self {
        let mut slots = [TemplateSlot::Undefined; PALETTE_SIZE];
        for (slot, &color) in slots.iter_mut().zip(palette.colors().iter()) {
            *slot = TemplateSlot::Color(color);
        }
        Self { slots }
    }

    /// Pin a slot to a fixed hardware color.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= 16`.
    #[inline]
    pub fn pin(mut self, slot: usize, color: EgaColor) -> Self {
        self.slots[slot] = TemplateSlot::Color(color);
        self
    }

    /// Exclude a slot from the output palette.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= 16`.
    #[inline]
    pub fn exclude(mut self, slot: usize) -> Self {
        self.slots[slot] = TemplateSlot::Unused;
        self
    }

    /// The state of one slot.
    #[inline]
    pub fn slot(&self, slot: usize) -> TemplateSlot {
        self.slots[slot]
    }

    /// All 16 slot states in order.
    #[inline]
    pub fn slots(&self) -> &[TemplateSlot; PALETTE_SIZE] {
        &self.slots
    }

    /// Number of slots the resolved palette must fill (pinned + free).
    pub fn usable_slots(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !matches!(slot, TemplateSlot::Unused))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_round_trip() {
        let mut palette = Palette::default();
        for slot in 0..PALETTE_SIZE {
            palette.set(slot, EgaColor::new((slot * 4) as u8).unwrap());
        }
        let bytes = palette.to_bytes();
        assert_eq!(Palette::from_bytes(bytes).unwrap(), palette);
    }

    #[test]
    fn test_from_bytes_rejects_invalid() {
        let mut bytes = [0u8; PALETTE_SIZE];
        bytes[5] = 64;
        assert_eq!(
            Palette::from_bytes(bytes),
            Err(PaletteError::InvalidColor { slot: 5, value: 64 })
        );
    }

    #[test]
    fn test_byte_wise_equality() {
        let a = Palette::default();
        let mut b = Palette::default();
        assert_eq!(a, b);
        b.set(3, EgaColor::new(1).unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn test_template_usable_slots() {
        assert_eq!(PaletteTemplate::free().usable_slots(), 16);

        let template = PaletteTemplate::free().exclude(0).exclude(1);
        assert_eq!(template.usable_slots(), 14);

        let all_unused =
            PaletteTemplate::new([TemplateSlot::Unused; PALETTE_SIZE]);
        assert_eq!(all_unused.usable_slots(), 0);
    }

    #[test]
    fn test_template_pinned_mirrors_palette() {
        let mut palette = Palette::default();
        palette.set(7, EgaColor::new(42).unwrap());
        let template = PaletteTemplate::pinned(&palette);
        assert_eq!(
            template.slot(7),
            TemplateSlot::Color(EgaColor::new(42).unwrap())
        );
        assert_eq!(template.usable_slots(), 16);
    }

    #[test]
    fn test_pin_then_exclude_overrides() {
        let template = PaletteTemplate::free()
            .pin(2, EgaColor::new(9).unwrap())
            .exclude(2);
        assert_eq!(template.slot(2), TemplateSlot::Unused);
    }
}
