//! Tile Clash - two tiles fight over a grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, tiles, collisions, jitter)
//! - `renderer`: Surfaces the frame is painted onto (WebGPU quads, pixel buffer)
//! - `config`: Data-driven canvas geometry and speed band

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, SimConfig};

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Default canvas dimensions in pixels
    pub const CANVAS_WIDTH: u32 = 600;
    pub const CANVAS_HEIGHT: u32 = 600;

    /// Grid cell edge length (pixels)
    pub const CELL_SIZE: u32 = 38;
    /// Moving tile edge length (pixels), also the collision probe diameter
    pub const TILE_SIZE: f32 = 38.0;

    /// Speed band enforced on each velocity axis (pixels/frame)
    pub const MIN_SPEED: f32 = 10.0;
    pub const MAX_SPEED: f32 = 20.0;
    /// Launch speed per axis, below the band until the first clamp
    pub const INITIAL_SPEED: f32 = 8.0;

    /// Half-width of the uniform per-frame velocity perturbation
    pub const JITTER: f32 = 0.005;

    /// Boundary probes per tile, evenly spaced by angle
    pub const PROBE_COUNT: usize = 8;

    /// Frames the native headless host runs (one minute at 60 Hz)
    pub const HEADLESS_FRAMES: u32 = 3600;
}

/// Point on a circle of radius `r` around `center` at angle `theta`
///
/// The offset is computed in f64 and rounded once to f32.
#[inline]
pub fn point_on_circle(center: Vec2, r: f32, theta: f64) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    let r = f64::from(r);
    center + Vec2::new((r * cos) as f32, (r * sin) as f32)
}

