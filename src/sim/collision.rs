//! Collision detection and response for tiles on the grid
//!
//! Tiles do not test exact overlap against cells. Instead eight probe points
//! on a circle around the tile center are looked up in the grid; every probe
//! that lands on a cell of the opposing team captures it and reverses one
//! velocity axis. Hits are applied in probe order, so two hits on the same
//! axis cancel out.

use glam::Vec2;

use super::grid::{Grid, Team};
use super::tile::MovingTile;
use crate::consts::PROBE_COUNT;
use crate::point_on_circle;

/// Velocity axis reversed by a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Axis a hit at `angle` bounces: horizontal when the probe points mostly
/// sideways, vertical otherwise
///
/// Compared in f64 on the angles from `probe_angles`, the diagonals at π/4
/// and 5π/4 come out horizontal and those at 3π/4 and 7π/4 vertical.
#[inline]
pub fn bounce_axis(angle: f64) -> Axis {
    let (sin, cos) = angle.sin_cos();
    if cos.abs() > sin.abs() { Axis::X } else { Axis::Y }
}

/// Probe angles in iteration order: 0, π/4, ..., 7π/4
///
/// Accumulated by repeated addition of π/4 so the diagonal tie-breaks stay
/// the same on every platform.
pub fn probe_angles() -> [f64; PROBE_COUNT] {
    let mut angle = 0.0;
    std::array::from_fn(|_| {
        let current = angle;
        angle += std::f64::consts::FRAC_PI_4;
        current
    })
}

/// A captured cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellHit {
    /// Grid column
    pub i: usize,
    /// Grid row
    pub j: usize,
    /// Owner before the capture
    pub previous: Team,
    /// Probe angle that found the cell
    pub angle: f64,
    /// Velocity axis reversed
    pub axis: Axis,
}

/// Probe the grid around `tile`, capture every opposing cell found and
/// bounce the tile once per capture
///
/// `radius` is the probe circle radius, half the tile's drawn size.
pub fn resolve_grid_collision(tile: &mut MovingTile, grid: &mut Grid, radius: f32) -> Vec<CellHit> {
    let mut hits = Vec::new();

    for angle in probe_angles() {
        let probe = point_on_circle(tile.pos, radius, angle);
        let Some((i, j)) = grid.cell_at_point(probe) else {
            continue;
        };

        let previous = grid.get(i, j);
        if !tile.collides_with(previous) {
            continue;
        }

        grid.set(i, j, tile.capture);

        let axis = bounce_axis(angle);
        match axis {
            Axis::X => tile.vel.x = -tile.vel.x,
            Axis::Y => tile.vel.y = -tile.vel.y,
        }

        hits.push(CellHit {
            i,
            j,
            previous,
            angle,
            axis,
        });
    }

    hits
}

/// Canvas edges reflected by a boundary check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallBounce {
    pub x: bool,
    pub y: bool,
}

impl WallBounce {
    /// Number of axes reflected (0-2)
    pub fn count(&self) -> usize {
        self.x as usize + self.y as usize
    }
}

/// Reverse each velocity axis whose next step would carry the tile center
/// past `half_size` from a canvas edge
pub fn reflect_at_boundary(tile: &mut MovingTile, canvas: Vec2, half_size: f32) -> WallBounce {
    let next = tile.next_pos();
    let mut bounce = WallBounce::default();

    if next.x > canvas.x - half_size || next.x < half_size {
        tile.vel.x = -tile.vel.x;
        bounce.x = true;
    }
    if next.y > canvas.y - half_size || next.y < half_size {
        tile.vel.y = -tile.vel.y;
        bounce.y = true;
    }

    bounce
}
