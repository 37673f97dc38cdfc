//! Glyph-sheet text rendering.
//!
//! The hardware has no font of its own; text is drawn from a [`Font`]: a
//! 2-color glyph sheet holding 256 glyphs in a 32x8 grid (one per byte
//! value), paired with foreground and background palette colors. Glyph
//! pixels with a nonzero palette index render as foreground, the rest as
//! background.

use thiserror::Error;

use crate::bitmap::{IndexedBitmap, Point, Region};

/// Glyphs per sheet row / column.
const SHEET_COLS: u32 = 32;
const SHEET_ROWS: u32 = 8;

/// Error type for font construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FontError {
    /// Sheet dimensions do not divide into a 32x8 grid of glyphs
    #[error("glyph sheet {width}x{height} does not divide into a 32x8 glyph grid")]
    InvalidSheet {
        /// Sheet width in pixels
        width: u32,
        /// Sheet height in pixels
        height: u32,
    },
}

/// A bitmap font: 256 glyphs plus the colors to stamp them with.
///
/// The sheet must be `32 * char_width` by `8 * char_height` pixels; glyph
/// for byte `b` sits at grid cell `(b % 32, b / 32)`.
///
/// # Example
///
/// ```
/// use ega_codec::{Font, IndexedBitmap, Point};
///
/// // An 8x14 glyph sheet (256 glyphs of 8x14 pixels)
/// let sheet = IndexedBitmap::new(256, 112);
/// let font = Font::new(sheet, 15, 0).unwrap();
/// assert_eq!(font.char_width(), 8);
/// assert_eq!(font.char_height(), 14);
///
/// let mut bitmap = IndexedBitmap::new(320, 200);
/// bitmap.render_text("HELLO", Point::new(8, 8), &font, None);
/// ```
#[derive(Debug, Clone)]
pub struct Font {
    glyphs: IndexedBitmap,
    char_width: u32,
    char_height: u32,
    fg: u8,
    bg: u8,
}

impl Font {
    /// Build a font from a glyph sheet and foreground/background palette
    /// colors.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::InvalidSheet`] unless the sheet divides evenly
    /// into 32 columns and 8 rows of glyphs.
    pub fn new(glyphs: IndexedBitmap, fg: u8, bg: u8) -> Result<Self, FontError> {
        let (w, h) = (glyphs.width(), glyphs.height());
        if w == 0 || h == 0 || w % SHEET_COLS != 0 || h % SHEET_ROWS != 0 {
            return Err(FontError::InvalidSheet {
                width: w,
                height: h,
            });
        }
        Ok(Self {
            char_width: w / SHEET_COLS,
            char_height: h / SHEET_ROWS,
            glyphs,
            fg,
            bg,
        })
    }

    /// Glyph cell width in pixels.
    #[inline]
    pub fn char_width(&self) -> u32 {
        self.char_width
    }

    /// Glyph cell height in pixels.
    #[inline]
    pub fn char_height(&self) -> u32 {
        self.char_height
    }

    /// Foreground palette color.
    #[inline]
    pub fn foreground(&self) -> u8 {
        self.fg
    }

    /// Background palette color.
    #[inline]
    pub fn background(&self) -> u8 {
        self.bg
    }

    /// Top-left sheet pixel of the glyph for byte `c`.
    fn glyph_origin(&self, c: u8) -> (u32, u32) {
        let col = u32::from(c) % SHEET_COLS;
        let row = u32::from(c) / SHEET_COLS;
        (col * self.char_width, row * self.char_height)
    }

    /// Whether the glyph pixel at `(gx, gy)` is a foreground pixel.
    fn glyph_pixel(&self, c: u8, gx: u32, gy: u32) -> bool {
        let (ox, oy) = self.glyph_origin(c);
        self.glyphs.color_at_raw(ox + gx, oy + gy) != 0
    }
}

impl IndexedBitmap {
    /// Draw one glyph cell at `pos`: foreground pixels in the font's fg
    /// color, the rest of the cell in its bg color.
    pub fn render_char(&mut self, c: u8, pos: Point, font: &Font, region: Option<&Region>) {
        for gy in 0..font.char_height() {
            for gx in 0..font.char_width() {
                let color = if font.glyph_pixel(c, gx, gy) {
                    font.foreground()
                } else {
                    font.background()
                };
                self.render_point(
                    Point::new(pos.x + gx as i32, pos.y + gy as i32),
                    color,
                    region,
                );
            }
        }
    }

    /// Draw a string left to right, one glyph cell per byte.
    pub fn render_text(&mut self, text: &str, pos: Point, font: &Font, region: Option<&Region>) {
        let mut x = pos.x;
        for c in text.bytes() {
            self.render_char(c, Point::new(x, pos.y), font, region);
            x += font.char_width() as i32;
        }
    }

    /// Draw a string like [`render_text`](Self::render_text), but space
    /// cells are skipped entirely (the cursor still advances), leaving
    /// whatever was under them untouched.
    pub fn render_text_transparent(
        &mut self,
        text: &str,
        pos: Point,
        font: &Font,
        region: Option<&Region>,
    ) {
        let mut x = pos.x;
        for c in text.bytes() {
            if c != b' ' {
                self.render_char(c, Point::new(x, pos.y), font, region);
            }
            x += font.char_width() as i32;
        }
    }
}
