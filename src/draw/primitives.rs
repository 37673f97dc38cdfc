//! Point, line, rect, circle, and ellipse rasterizers.

use crate::bitmap::{IndexedBitmap, Point, Rect, Region};

/// Plot one region-local pixel, clipping against the region extent and the
/// bitmap bounds. Returns whether a pixel was written.
fn plot(bitmap: &mut IndexedBitmap, region: &Region, x: i32, y: i32, color: u8) -> bool {
    if x < 0 || y < 0 {
        return false;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= region.width || y >= region.height {
        return false;
    }
    let abs_x = region.origin_x + x;
    let abs_y = region.origin_y + y;
    if abs_x >= bitmap.width() || abs_y >= bitmap.height() {
        return false;
    }
    bitmap.set_pixel_raw(abs_x, abs_y, color);
    true
}

impl IndexedBitmap {
    /// Draw a single pixel: sets the alpha bit and the color nibble.
    ///
    /// A fully clipped point leaves the bitmap untouched and does not mark
    /// it dirty.
    pub fn render_point(&mut self, pos: Point, color: u8, region: Option<&Region>) {
        let region = region.copied().unwrap_or_else(|| self.full_region());
        if plot(self, &region, pos.x, pos.y, color) {
            self.mark_dirty();
        }
    }

    /// Draw a line from `p1` to `p2`.
    ///
    /// Identical endpoints are a no-op. The walk steps one pixel per
    /// iteration along the major axis (ties go to x), accumulating the
    /// minor axis by the line's slope with truncation toward zero; the far
    /// endpoint is always plotted explicitly so truncation can never drop
    /// it.
    pub fn render_line(&mut self, p1: Point, p2: Point, color: u8, region: Option<&Region>) {
        if p1 == p2 {
            return;
        }
        let region = region.copied().unwrap_or_else(|| self.full_region());
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let mut drew = false;

        if dx.abs() >= dy.abs() {
            let (a, b) = if p1.x <= p2.x { (p1, p2) } else { (p2, p1) };
            let slope = f64::from(b.y - a.y) / f64::from(b.x - a.x);
            let mut minor = f64::from(a.y);
            for x in a.x..b.x {
                drew |= plot(self, &region, x, minor as i32, color);
                minor += slope;
            }
            drew |= plot(self, &region, b.x, b.y, color);
        } else {
            let (a, b) = if p1.y <= p2.y { (p1, p2) } else { (p2, p1) };
            let slope = f64::from(b.x - a.x) / f64::from(b.y - a.y);
            let mut minor = f64::from(a.x);
            for y in a.y..b.y {
                drew |= plot(self, &region, minor as i32, y, color);
                minor += slope;
            }
            drew |= plot(self, &region, b.x, b.y, color);
        }

        if drew {
            self.mark_dirty();
        }
    }

    /// Draw a filled rectangle covering `rect.width x rect.height` pixels.
    pub fn render_rect(&mut self, rect: Rect, color: u8, region: Option<&Region>) {
        let region = region.copied().unwrap_or_else(|| self.full_region());
        let mut drew = false;
        for dy in 0..rect.height as i32 {
            for dx in 0..rect.width as i32 {
                drew |= plot(self, &region, rect.x + dx, rect.y + dy, color);
            }
        }
        if drew {
            self.mark_dirty();
        }
    }

    /// Draw a one-pixel rectangle outline along the edges of `rect`.
    pub fn render_line_rect(&mut self, rect: Rect, color: u8, region: Option<&Region>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let region = region.copied().unwrap_or_else(|| self.full_region());
        let right = rect.x + rect.width as i32 - 1;
        let bottom = rect.y + rect.height as i32 - 1;
        let mut drew = false;

        for x in rect.x..=right {
            drew |= plot(self, &region, x, rect.y, color);
            drew |= plot(self, &region, x, bottom, color);
        }
        for y in rect.y..=bottom {
            drew |= plot(self, &region, rect.x, y, color);
            drew |= plot(self, &region, right, y, color);
        }

        if drew {
            self.mark_dirty();
        }
    }

    /// Draw a circle outline using the midpoint algorithm.
    ///
    /// Negative radii are a no-op; radius 0 plots the center point.
    pub fn render_circle(&mut self, center: Point, radius: i32, color: u8, region: Option<&Region>) {
        if radius < 0 {
            return;
        }
        let region = region.copied().unwrap_or_else(|| self.full_region());
        let (cx, cy) = (center.x, center.y);
        let mut drew = false;

        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;
        while x >= y {
            for (px, py) in [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ] {
                drew |= plot(self, &region, px, py, color);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }

        if drew {
            self.mark_dirty();
        }
    }

    /// Draw an ellipse outline inscribed in `rect` using the two-region
    /// midpoint algorithm.
    ///
    /// The semi-axes are `(width - 1) / 2` and `(height - 1) / 2` so the
    /// outline stays inside the rect; a zero extent is a no-op.
    pub fn render_ellipse(&mut self, rect: Rect, color: u8, region: Option<&Region>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let rx = i64::from((rect.width - 1) / 2);
        let ry = i64::from((rect.height - 1) / 2);
        let cx = rect.x + rx as i32;
        let cy = rect.y + ry as i32;
        self.ellipse_outline(cx, cy, rx, ry, color, region);
    }

    /// Draw a circle the way QBasic's CIRCLE statement does, correcting for
    /// non-square pixels with an aspect ratio.
    ///
    /// `aspect < 1` keeps the horizontal radius and scales the vertical
    /// radius by `aspect`; `aspect >= 1` keeps the vertical radius and
    /// divides the horizontal radius by `aspect`. Non-positive radii or
    /// aspects are a no-op.
    pub fn render_ellipse_qb(
        &mut self,
        center: Point,
        radius: i32,
        aspect: f64,
        color: u8,
        region: Option<&Region>,
    ) {
        if radius < 0 || aspect <= 0.0 {
            return;
        }
        let (rx, ry) = if aspect < 1.0 {
            (i64::from(radius), (f64::from(radius) * aspect).round() as i64)
        } else {
            ((f64::from(radius) / aspect).round() as i64, i64::from(radius))
        };
        self.ellipse_outline(center.x, center.y, rx, ry, color, region);
    }

    /// Two-region midpoint ellipse, with degenerate axes falling back to
    /// straight lines.
    fn ellipse_outline(
        &mut self,
        cx: i32,
        cy: i32,
        rx: i64,
        ry: i64,
        color: u8,
        region: Option<&Region>,
    ) {
        let region = region.copied().unwrap_or_else(|| self.full_region());
        let mut drew = false;

        if rx == 0 || ry == 0 {
            // Degenerate: a point or an axis-aligned line
            for d in -rx..=rx {
                drew |= plot(self, &region, cx + d as i32, cy, color);
            }
            for d in -ry..=ry {
                drew |= plot(self, &region, cx, cy + d as i32, color);
            }
            if drew {
                self.mark_dirty();
            }
            return;
        }

        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let mut x = 0i64;
        let mut y = ry;
        let mut dx = 0i64;
        let mut dy = 2 * rx2 * y;

        let mut plot4 = |bitmap: &mut Self, x: i64, y: i64, drew: &mut bool| {
            for (px, py) in [
                (cx + x as i32, cy + y as i32),
                (cx - x as i32, cy + y as i32),
                (cx + x as i32, cy - y as i32),
                (cx - x as i32, cy - y as i32),
            ] {
                *drew |= plot(bitmap, &region, px, py, color);
            }
        };

        // Region 1: slope > -1
        let mut d1 = ry2 - rx2 * ry + rx2 / 4;
        while dx < dy {
            plot4(self, x, y, &mut drew);
            x += 1;
            dx += 2 * ry2;
            if d1 < 0 {
                d1 += dx + ry2;
            } else {
                y -= 1;
                dy -= 2 * rx2;
                d1 += dx - dy + ry2;
            }
        }

        // Region 2: slope <= -1
        let mut d2 =
            ry2 * (2 * x + 1) * (2 * x + 1) / 4 + rx2 * (y - 1) * (y - 1) - rx2 * ry2;
        while y >= 0 {
            plot4(self, x, y, &mut drew);
            y -= 1;
            dy -= 2 * rx2;
            if d2 > 0 {
                d2 += rx2 - dy;
            } else {
                x += 1;
                dx += 2 * ry2;
                d2 += dx - dy + rx2;
            }
        }

        if drew {
            self.mark_dirty();
        }
    }
}
