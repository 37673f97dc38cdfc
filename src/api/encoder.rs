//! Builder-style entry point for encoding images.

use crate::color::{EgaColor, Rgba8};
use crate::palette::PaletteTemplate;
use crate::quant::{self, Encoded};

use super::error::CodecError;

/// Configures and runs the encoding pipeline.
///
/// By default every palette slot is free and the quantizer picks all 16
/// colors itself; pin or exclude slots to constrain it.
///
/// # Example
///
/// ```
/// use ega_codec::{closest_ega_color, EgaEncoder, Rgba8};
///
/// let black = closest_ega_color(Rgba8::opaque(0, 0, 0));
/// let pixels = vec![Rgba8::opaque(200, 40, 40); 64];
/// let encoded = EgaEncoder::new()
///     .pin(0, black)
///     .encode(&pixels, 8, 8)
///     .unwrap();
/// assert_eq!(encoded.palette.color(0), black);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EgaEncoder {
    template: PaletteTemplate,
}

impl EgaEncoder {
    /// Encoder with a fully free palette template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole palette template.
    pub fn with_template(mut self, template: PaletteTemplate) -> Self {
        self.template = template;
        self
    }

    /// Pin `slot` to a fixed hardware color.
    pub fn pin(mut self, slot: usize, color: EgaColor) -> Self {
        self.template = self.template.pin(slot, color);
        self
    }

    /// Mark `slot` as unusable.
    pub fn exclude(mut self, slot: usize) -> Self {
        self.template = self.template.exclude(slot);
        self
    }

    /// The template this encoder will quantize against.
    #[inline]
    pub fn template(&self) -> &PaletteTemplate {
        &self.template
    }

    /// Quantize `pixels` (row-major RGBA, `width * height` entries) into
    /// a packed bitmap and resolved palette.
    ///
    /// # Errors
    ///
    /// Propagates [`QuantizeError`](crate::QuantizeError) as
    /// [`CodecError::Quantize`].
    pub fn encode(&self, pixels: &[Rgba8], width: u32, height: u32) -> Result<Encoded, CodecError> {
        Ok(quant::encode(pixels, width, height, &self.template)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::closest_ega_color;
    use crate::palette::{TemplateSlot, PALETTE_SIZE};
    use crate::quant::QuantizeError;

    #[test]
    fn test_default_template_is_free() {
        let encoder = EgaEncoder::new();
        for slot in 0..PALETTE_SIZE {
            assert_eq!(encoder.template().slot(slot), TemplateSlot::Undefined);
        }
    }

    #[test]
    fn test_builder_pins_and_excludes() {
        let white = closest_ega_color(Rgba8::opaque(255, 255, 255));
        let encoder = EgaEncoder::new().pin(3, white).exclude(4);
        assert_eq!(encoder.template().slot(3), TemplateSlot::Color(white));
        assert_eq!(encoder.template().slot(4), TemplateSlot::Unused);
    }

    #[test]
    fn test_encode_propagates_quantize_errors() {
        let mut encoder = EgaEncoder::new();
        for slot in 0..PALETTE_SIZE {
            encoder = encoder.exclude(slot);
        }
        let pixels = vec![Rgba8::opaque(1, 2, 3); 4];
        let err = encoder.encode(&pixels, 2, 2).unwrap_err();
        assert_eq!(err, CodecError::Quantize(QuantizeError::NoUsableSlots));
    }
}
