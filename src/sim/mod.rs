//! Deterministic simulation module
//!
//! All animation logic lives here. This module must be pure and deterministic:
//! - One step per displayed frame
//! - Injected, seeded RNG only
//! - Stable iteration order (tiles by index, probes by angle)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod motion;
pub mod score;
pub mod state;
pub mod tick;
pub mod tile;

pub use collision::{Axis, CellHit, WallBounce, bounce_axis, reflect_at_boundary, resolve_grid_collision};
pub use grid::{Grid, Team};
pub use motion::{SpeedBand, jitter, jitter_and_clamp};
pub use score::Score;
pub use state::{RngState, SimState};
pub use tick::{TickReport, tick};
pub use tile::MovingTile;
