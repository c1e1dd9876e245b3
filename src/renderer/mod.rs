//! Rendering module
//!
//! The frame is painted through the `Surface` trait: a `QuadBatch` feeds the
//! WebGPU pipeline, a `PixelBuffer` covers headless runs.

pub mod frame;
pub mod pipeline;
pub mod pixels;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use frame::{draw_frame, score_html};
pub use pipeline::{RenderInitError, RenderState};
pub use pixels::PixelBuffer;
pub use shapes::QuadBatch;
pub use surface::{Rect, Surface};
pub use vertex::Vertex;
