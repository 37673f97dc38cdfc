//! Region, point, and rect geometry for draw and read calls.

/// A signed pixel position, as passed to drawing primitives.
///
/// Positions may be negative or past the bitmap edge; primitives clip
/// silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle for filled/outline rect and ellipse calls.
///
/// Covers `width x height` pixels starting at `(x, y)`; a zero extent
/// covers nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// An origin + clip box constraining every draw and read call.
///
/// Draw coordinates are offset by the origin, then clipped against the
/// region extent (and the bitmap bounds). Passing `None` to any call that
/// accepts a region uses the bitmap's full extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub origin_x: u32,
    pub origin_y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    #[inline]
    pub fn new(origin_x: u32, origin_y: u32, width: u32, height: u32) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// The full-bitmap region for the given dimensions.
    #[inline]
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            width,
            height,
        }
    }
}
