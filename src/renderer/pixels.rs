//! Software RGBA8 surface
//!
//! Used where there is no GPU: the native headless host and tests.

use super::surface::{Rect, Surface};
use super::vertex::colors::to_rgba8;

/// Bytes needed for a `width` x `height` RGBA8 image, computed in `usize`
fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

/// RGBA8888 pixel buffer, row-major, top-left origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; byte_len(width, height)],
            width,
            height,
        }
    }

    /// Byte offset of pixel `(x, y)`
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Pixel at `(x, y)`, None when outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.offset(x, y);
        let mut px = [0; 4];
        px.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(px)
    }

    /// Pixel columns/rows covered by `rect`, clipped to the buffer
    fn span(&self, rect: Rect) -> (u32, u32, u32, u32) {
        let clip = |v: f32, max: u32| v.round().clamp(0.0, max as f32) as u32;
        (
            clip(rect.x, self.width),
            clip(rect.y, self.height),
            clip(rect.right(), self.width),
            clip(rect.bottom(), self.height),
        )
    }
}

impl Surface for PixelBuffer {
    fn clear(&mut self, color: [f32; 4]) {
        let rgba = to_rgba8(color);
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]) {
        let rgba = to_rgba8(color);
        let (x0, y0, x1, y1) = self.span(rect);
        if x0 >= x1 {
            return;
        }
        let row_bytes = (x1 - x0) as usize * 4;
        for y in y0..y1 {
            let start = self.offset(x0, y);
            for px in self.pixels[start..start + row_bytes].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips() {
        let mut buf = PixelBuffer::new(10, 10);
        buf.clear([0.0, 0.0, 0.0, 1.0]);
        buf.fill_rect(Rect::new(8.0, -2.0, 5.0, 4.0), [1.0, 0.0, 0.0, 1.0]);

        assert_eq!(buf.pixel(9, 0), Some([255, 0, 0, 255]));
        assert_eq!(buf.pixel(9, 1), Some([255, 0, 0, 255]));
        assert_eq!(buf.pixel(9, 2), Some([0, 0, 0, 255]));
        assert_eq!(buf.pixel(7, 0), Some([0, 0, 0, 255]));
        assert_eq!(buf.pixel(10, 0), None);
    }

    #[test]
    fn test_fill_rect_fully_outside() {
        let mut buf = PixelBuffer::new(4, 4);
        let before = buf.clone();
        buf.fill_rect(Rect::new(10.0, 10.0, 2.0, 2.0), [1.0; 4]);
        assert_eq!(buf, before);
        assert_eq!(buf.pixels.len(), 64);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_byte_len_past_u32_range() {
        // 40000 * 40000 * 4 wraps in u32 arithmetic
        assert_eq!(byte_len(40_000, 40_000), 6_400_000_000);
    }

    #[test]
    fn test_fill_last_row() {
        let mut buf = PixelBuffer::new(3, 5);
        buf.fill_rect(Rect::new(1.0, 4.0, 2.0, 1.0), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(buf.pixel(2, 4), Some([0, 0, 255, 255]));
        assert_eq!(buf.pixel(0, 4), Some([0, 0, 0, 0]));
        assert_eq!(buf.pixel(2, 3), Some([0, 0, 0, 0]));
    }
}
