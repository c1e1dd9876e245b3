//! Drawing target abstraction
//!
//! The frame painter only needs to clear and fill axis-aligned rectangles in
//! pixel coordinates (origin top-left, y down).

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of edge `size` centered on `(cx, cy)`
    pub fn centered(cx: f32, cy: f32, size: f32) -> Self {
        Self::new(cx - size / 2.0, cy - size / 2.0, size, size)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Something a frame can be painted onto
pub trait Surface {
    /// Discard everything drawn and fill with `color`
    fn clear(&mut self, color: [f32; 4]);

    /// Fill `rect` with `color`; later fills cover earlier ones
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]);
}
