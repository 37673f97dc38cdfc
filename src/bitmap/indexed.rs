//! The packed indexed bitmap and its decoder.
//!
//! Pixel data organization:
//!
//! - alpha is stored as 1 bit per pixel in byte-aligned scanlines, LSB
//!   first within each byte; bit set = opaque.
//! - color is stored as 4 bits per pixel, two pixels per byte: the low
//!   nibble is the even (leftmost) pixel of the pair, the high nibble the
//!   odd pixel. Color scanlines reserve one spare byte when the width is
//!   even, so a 4-bit right shift of a scanline never runs off the end
//!   (odd widths already have a spare half byte).
//!
//! Decoding to RGBA is cached: the cache is invalidated by any mutation
//! (tracked with a dirty flag every mutator sets) or by decoding with a
//! palette that differs byte-wise from the last one used.

use tracing::trace;

use super::error::BitmapError;
use super::region::Region;
use crate::palette::Palette;

/// Cached RGBA decode output plus the palette it was rendered with.
#[derive(Debug, Clone)]
struct DecodeCache {
    pixels: Vec<u8>,
    palette: Palette,
}

/// A 16-color image in the packed hardware format.
///
/// Owns the alpha plane and the color plane described in the module docs.
/// Created at a fixed size; [`resize`](Self::resize) reallocates and
/// discards all content. Follows embedded-format convention: allocation
/// failure aborts (`Vec` semantics), all other failure modes are explicit
/// `Result`s.
///
/// # Example
///
/// ```
/// use ega_codec::{IndexedBitmap, Palette};
///
/// let mut bitmap = IndexedBitmap::new(4, 4);
/// bitmap.clear(7, None);
/// assert_eq!(bitmap.color_at(None, 0, 0), Ok(7));
///
/// let rgba = bitmap.decode(&Palette::default());
/// assert_eq!(rgba.len(), 4 * 4 * 4);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedBitmap {
    width: u32,
    height: u32,
    /// Bytes per alpha scanline: `ceil(width / 8)`.
    alpha_row_bytes: usize,
    /// Bytes per color scanline: `ceil(width / 2)` plus shift padding.
    color_row_bytes: usize,
    alpha: Vec<u8>,
    pixels: Vec<u8>,
    dirty: bool,
    decode_cache: Option<DecodeCache>,
    decode_count: u64,
}

fn alpha_row_bytes(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

fn color_row_bytes(width: u32) -> usize {
    // Even widths reserve one extra byte for the 4-bit right shift; odd
    // widths have a spare half byte in the last nibble already.
    (width as usize).div_ceil(2) + usize::from(width % 2 == 0)
}

impl IndexedBitmap {
    /// Allocate a bitmap with zeroed planes (all transparent, all color 0).
    pub fn new(width: u32, height: u32) -> Self {
        let arb = alpha_row_bytes(width);
        let crb = color_row_bytes(width);
        Self {
            width,
            height,
            alpha_row_bytes: arb,
            color_row_bytes: crb,
            alpha: vec![0; arb * height as usize],
            pixels: vec![0; crb * height as usize],
            dirty: true,
            decode_cache: None,
            decode_count: 0,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The region covering the whole bitmap.
    #[inline]
    pub fn full_region(&self) -> Region {
        Region::full(self.width, self.height)
    }

    /// Raw alpha plane bytes, scanline-major.
    #[inline]
    pub fn alpha_plane(&self) -> &[u8] {
        &self.alpha
    }

    /// Raw color plane bytes, scanline-major.
    #[inline]
    pub fn color_plane(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per alpha scanline.
    #[inline]
    pub fn alpha_row_bytes(&self) -> usize {
        self.alpha_row_bytes
    }

    /// Bytes per color scanline.
    #[inline]
    pub fn color_row_bytes(&self) -> usize {
        self.color_row_bytes
    }

    /// True if the decode cache is stale relative to the planes.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of times the decode cache has been recomputed.
    ///
    /// Diagnostic counter; lets callers (and tests) observe cache hits.
    #[inline]
    pub fn decode_count(&self) -> u64 {
        self.decode_count
    }

    /// Resize the bitmap, discarding all content.
    ///
    /// No-op when the dimensions are unchanged. Otherwise both planes are
    /// reallocated zeroed (everything transparent) and the decode cache is
    /// dropped.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.alpha_row_bytes = alpha_row_bytes(width);
        self.color_row_bytes = color_row_bytes(width);
        self.alpha = vec![0; self.alpha_row_bytes * height as usize];
        self.pixels = vec![0; self.color_row_bytes * height as usize];
        self.dirty = true;
        self.decode_cache = None;
    }

    /// Fill with a palette color, marking everything opaque.
    ///
    /// A full-bitmap clear (no region, or a region equal to the full
    /// extent) takes the fast path: alpha bytes to 0xFF, color bytes to
    /// the nibble-doubled color. Any other region degrades to a filled
    /// rectangle draw over the region.
    pub fn clear(&mut self, color: u8, region: Option<&Region>) {
        let full = self.full_region();
        match region {
            None => self.clear_full(color),
            Some(r) if *r == full => self.clear_full(color),
            Some(r) => {
                let rect =
                    super::region::Rect::new(0, 0, r.width, r.height);
                self.render_rect(rect, color, Some(r));
            }
        }
    }

    fn clear_full(&mut self, color: u8) {
        let doubled = (color & 0x0F) | (color << 4);
        self.alpha.fill(0xFF);
        self.pixels.fill(doubled);
        self.dirty = true;
    }

    /// Mark every pixel transparent without touching the color plane.
    pub fn clear_alpha(&mut self) {
        self.alpha.fill(0);
        self.dirty = true;
    }

    /// Read the palette index at region-local `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BitmapError::OutOfBounds`] when the coordinate falls
    /// outside the region extent or, after offsetting by the region
    /// origin, outside the bitmap.
    pub fn color_at(
        &self,
        region: Option<&Region>,
        x: u32,
        y: u32,
    ) -> Result<u8, BitmapError> {
        let full = self.full_region();
        let region = region.unwrap_or(&full);

        if x >= region.width || y >= region.height {
            return Err(BitmapError::OutOfBounds {
                x,
                y,
                width: region.width,
                height: region.height,
            });
        }
        let abs_x = region.origin_x + x;
        let abs_y = region.origin_y + y;
        if abs_x >= self.width || abs_y >= self.height {
            return Err(BitmapError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.color_at_raw(abs_x, abs_y))
    }

    /// Write one pixel: color nibble plus alpha bit. No bounds check, no
    /// dirty marking; callers clip first and mark dirty once.
    #[inline]
    pub(crate) fn set_pixel_raw(&mut self, x: u32, y: u32, color: u8) {
        let row = y as usize * self.color_row_bytes;
        let byte = row + (x as usize >> 1);
        if x & 1 == 1 {
            self.pixels[byte] = (self.pixels[byte] & 0x0F) | (color << 4);
        } else {
            self.pixels[byte] = (self.pixels[byte] & 0xF0) | (color & 0x0F);
        }

        let arow = y as usize * self.alpha_row_bytes;
        self.alpha[arow + (x as usize >> 3)] |= 1 << (x & 7);
    }

    /// Read one pixel's color nibble. No bounds check.
    #[inline]
    pub(crate) fn color_at_raw(&self, x: u32, y: u32) -> u8 {
        let row = y as usize * self.color_row_bytes;
        let two_pix = self.pixels[row + (x as usize >> 1)];
        if x & 1 == 1 {
            two_pix >> 4
        } else {
            two_pix & 0x0F
        }
    }

    /// Read one pixel's alpha bit. No bounds check.
    #[inline]
    pub(crate) fn alpha_at_raw(&self, x: u32, y: u32) -> bool {
        let row = y as usize * self.alpha_row_bytes;
        self.alpha[row + (x as usize >> 3)] & (1 << (x & 7)) != 0
    }

    /// Flag the planes as changed so the next decode recomputes.
    #[inline]
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Decode to RGBA through the cache.
    ///
    /// Recomputes only when the bitmap is dirty or `palette` differs
    /// byte-wise from the palette of the last decode; otherwise returns
    /// the cached buffer unchanged. The result is `width * height * 4`
    /// bytes, row-major RGBA: transparent pixels are `[0, 0, 0, 0]`,
    /// opaque pixels carry their palette slot's hardware color and alpha
    /// 255.
    pub fn decode(&mut self, palette: &Palette) -> &[u8] {
        let cache_valid = !self.dirty
            && self
                .decode_cache
                .as_ref()
                .is_some_and(|cache| cache.palette == *palette);

        if !cache_valid {
            let mut pixels =
                vec![0u8; self.width as usize * self.height as usize * 4];
            self.decode_pixels(palette, &mut pixels);
            self.decode_cache = Some(DecodeCache {
                pixels,
                palette: *palette,
            });
            self.dirty = false;
            self.decode_count += 1;
            trace!(
                width = self.width,
                height = self.height,
                decodes = self.decode_count,
                "decode cache recomputed"
            );
        }

        self.decode_cache
            .as_ref()
            .map(|cache| cache.pixels.as_slice())
            .unwrap_or(&[])
    }

    /// Decode to RGBA into a caller-supplied buffer, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns [`BitmapError::SizeMismatch`] unless `target.len()` equals
    /// `width * height * 4`. The bitmap is never resized to fit.
    pub fn decode_into(
        &self,
        palette: &Palette,
        target: &mut [u8],
    ) -> Result<(), BitmapError> {
        let expected = self.width as usize * self.height as usize * 4;
        if target.len() != expected {
            return Err(BitmapError::SizeMismatch {
                expected,
                actual: target.len(),
            });
        }
        target.fill(0);
        self.decode_pixels(palette, target);
        Ok(())
    }

    /// Scanline decode walk shared by the cached and uncached paths.
    /// `target` must be zeroed and sized `width * height * 4`.
    fn decode_pixels(&self, palette: &Palette, target: &mut [u8]) {
        let mut asl = 0usize; // alpha byte position
        let mut psl = 0usize; // pixel byte position
        let mut dsl = 0usize; // decode byte position

        for _y in 0..self.height {
            for x in 0..self.width as usize {
                if self.alpha[asl + (x >> 3)] & (1 << (x & 7)) != 0 {
                    let two_pix = self.pixels[psl + (x >> 1)];
                    let idx = if x & 1 == 1 {
                        two_pix >> 4
                    } else {
                        two_pix & 0x0F
                    };
                    let [r, g, b] = palette.color(idx as usize).to_rgb();
                    let out = dsl + x * 4;
                    target[out] = r;
                    target[out + 1] = g;
                    target[out + 2] = b;
                    target[out + 3] = 255;
                }
            }
            asl += self.alpha_row_bytes;
            psl += self.color_row_bytes;
            dsl += self.width as usize * 4;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::EgaColor;

    #[test]
    fn test_row_byte_widths() {
        // Alpha rows are byte padded
        assert_eq!(alpha_row_bytes(1), 1);
        assert_eq!(alpha_row_bytes(8), 1);
        assert_eq!(alpha_row_bytes(9), 2);
        // Even color rows reserve a shift byte, odd rows have the spare
        // half byte already
        assert_eq!(color_row_bytes(1), 1);
        assert_eq!(color_row_bytes(2), 2);
        assert_eq!(color_row_bytes(3), 2);
        assert_eq!(color_row_bytes(4), 3);
    }

    #[test]
    fn test_new_is_transparent() {
        let bitmap = IndexedBitmap::new(10, 10);
        assert!(bitmap.alpha_plane().iter().all(|&b| b == 0));
        assert!(bitmap.color_plane().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_nibble_packing() {
        // Indices 3 then 10 across a 2-wide row pack to one 0xA3 byte:
        // low nibble = pixel 0, high nibble = pixel 1.
        let mut bitmap = IndexedBitmap::new(2, 1);
        bitmap.set_pixel_raw(0, 0, 3);
        bitmap.set_pixel_raw(1, 0, 10);
        assert_eq!(bitmap.color_plane()[0], 0xA3);

        let mut single = IndexedBitmap::new(1, 1);
        single.set_pixel_raw(0, 0, 3);
        assert_eq!(single.color_plane()[0], 0x03);
    }

    #[test]
    fn test_set_pixel_sets_alpha_bit() {
        let mut bitmap = IndexedBitmap::new(16, 1);
        bitmap.set_pixel_raw(9, 0, 5);
        assert!(bitmap.alpha_at_raw(9, 0));
        assert!(!bitmap.alpha_at_raw(8, 0));
        // Bit 1 of the second alpha byte (LSB-first)
        assert_eq!(bitmap.alpha_plane()[1], 0b0000_0010);
    }

    #[test]
    fn test_clear_fast_path() {
        let mut bitmap = IndexedBitmap::new(6, 3);
        bitmap.clear(0x0A, None);
        assert!(bitmap.alpha_plane().iter().all(|&b| b == 0xFF));
        assert!(bitmap.color_plane().iter().all(|&b| b == 0xAA));
        assert_eq!(bitmap.color_at(None, 5, 2), Ok(0x0A));
    }

    #[test]
    fn test_clear_region_only_touches_region() {
        let mut bitmap = IndexedBitmap::new(8, 8);
        let region = Region::new(2, 2, 3, 3);
        bitmap.clear(7, Some(&region));

        for y in 0..8 {
            for x in 0..8 {
                let inside = (2..5).contains(&x) && (2..5).contains(&y);
                assert_eq!(
                    bitmap.alpha_at_raw(x, y),
                    inside,
                    "alpha mismatch at ({x}, {y})"
                );
                if inside {
                    assert_eq!(bitmap.color_at_raw(x, y), 7);
                }
            }
        }
    }

    #[test]
    fn test_clear_alpha_preserves_color_plane() {
        let mut bitmap = IndexedBitmap::new(4, 2);
        bitmap.clear(0x0C, None);
        let colors_before = bitmap.color_plane().to_vec();

        bitmap.clear_alpha();
        assert!(bitmap.alpha_plane().iter().all(|&b| b == 0));
        assert_eq!(bitmap.color_plane(), colors_before.as_slice());
    }

    #[test]
    fn test_color_at_bounds_checked() {
        let bitmap = IndexedBitmap::new(4, 4);
        assert!(bitmap.color_at(None, 3, 3).is_ok());
        assert_eq!(
            bitmap.color_at(None, 4, 0),
            Err(BitmapError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 4
            })
        );

        // A region reaching past the bitmap still clips to the bitmap
        let region = Region::new(3, 3, 4, 4);
        assert!(bitmap.color_at(Some(&region), 0, 0).is_ok());
        assert!(bitmap.color_at(Some(&region), 2, 2).is_err());
    }

    #[test]
    fn test_region_offsets_reads() {
        let mut bitmap = IndexedBitmap::new(8, 8);
        bitmap.set_pixel_raw(5, 6, 9);

        let region = Region::new(4, 4, 4, 4);
        assert_eq!(bitmap.color_at(Some(&region), 1, 2), Ok(9));
    }

    #[test]
    fn test_resize_same_size_keeps_content() {
        let mut bitmap = IndexedBitmap::new(4, 4);
        bitmap.clear(5, None);
        bitmap.resize(4, 4);
        assert_eq!(bitmap.color_at(None, 0, 0), Ok(5));
        assert!(bitmap.alpha_at_raw(0, 0));
    }

    #[test]
    fn test_resize_discards_content() {
        let mut bitmap = IndexedBitmap::new(4, 4);
        bitmap.clear(5, None);
        bitmap.resize(8, 2);
        assert_eq!(bitmap.width(), 8);
        assert_eq!(bitmap.height(), 2);
        assert!(bitmap.alpha_plane().iter().all(|&b| b == 0));
        assert!(bitmap.color_plane().iter().all(|&b| b == 0));
        assert!(bitmap.is_dirty());
    }

    fn test_palette() -> Palette {
        let mut palette = Palette::default();
        palette.set(1, EgaColor::new(63).unwrap()); // white
        palette.set(2, EgaColor::new(0b100100).unwrap()); // bright red
        palette
    }

    #[test]
    fn test_decode_output() {
        let mut bitmap = IndexedBitmap::new(2, 1);
        bitmap.set_pixel_raw(1, 0, 2);
        bitmap.mark_dirty();

        let rgba = bitmap.decode(&test_palette());
        // Pixel 0 transparent, pixel 1 bright red
        assert_eq!(&rgba[0..4], &[0, 0, 0, 0]);
        assert_eq!(&rgba[4..8], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_decode_cache_hit_and_invalidation() {
        let mut bitmap = IndexedBitmap::new(4, 4);
        bitmap.clear(1, None);
        let palette = test_palette();

        let first = bitmap.decode(&palette).to_vec();
        assert_eq!(bitmap.decode_count(), 1);
        assert!(!bitmap.is_dirty());

        // Unchanged bitmap + palette: cache hit, identical bytes
        let second = bitmap.decode(&palette).to_vec();
        assert_eq!(bitmap.decode_count(), 1);
        assert_eq!(first, second);

        // Changed palette: recompute
        let mut other = palette;
        other.set(1, EgaColor::new(5).unwrap());
        bitmap.decode(&other);
        assert_eq!(bitmap.decode_count(), 2);

        // Mutation marks dirty: recompute even with the same palette
        bitmap.clear_alpha();
        assert!(bitmap.is_dirty());
        bitmap.decode(&other);
        assert_eq!(bitmap.decode_count(), 3);
    }

    #[test]
    fn test_decode_into_size_mismatch() {
        let bitmap = IndexedBitmap::new(3, 3);
        let mut short = vec![0u8; 3 * 3 * 4 - 1];
        assert_eq!(
            bitmap.decode_into(&test_palette(), &mut short),
            Err(BitmapError::SizeMismatch {
                expected: 36,
                actual: 35
            })
        );

        let mut exact = vec![0u8; 3 * 3 * 4];
        assert!(bitmap.decode_into(&test_palette(), &mut exact).is_ok());
    }

    #[test]
    fn test_decode_into_matches_cached_decode() {
        let mut bitmap = IndexedBitmap::new(5, 3);
        bitmap.clear(2, None);
        bitmap.set_pixel_raw(0, 0, 1);
        let palette = test_palette();

        let mut uncached = vec![0xFFu8; 5 * 3 * 4];
        bitmap.decode_into(&palette, &mut uncached).unwrap();
        assert_eq!(bitmap.decode(&palette), uncached.as_slice());
    }
}
