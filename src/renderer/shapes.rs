//! Shape generation for 2D primitives

use super::surface::{Rect, Surface};
use super::vertex::Vertex;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Triangle list in pixel coordinates, uploaded to the GPU once per frame
#[derive(Debug, Clone, Default)]
pub struct QuadBatch {
    pub vertices: Vec<Vertex>,
    pub clear_color: [f32; 4],
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of filled rectangles
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }
}

impl Surface for QuadBatch {
    fn clear(&mut self, color: [f32; 4]) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn fill_rect(&mut self, r: Rect, color: [f32; 4]) {
        self.vertices.extend_from_slice(&rect(r, color));
    }
}
