//! Simulation state
//!
//! Everything the frame loop mutates lives in `SimState`, owned by the host
//! and handed to `tick` by reference each frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::motion::SpeedBand;
use super::score::Score;
use super::tile::MovingTile;
use crate::config::SimConfig;

/// Seed for the jitter RNG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Fresh generator at the start of this seed's stream
    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Seed the host's jitter RNG was created from
    pub rng_state: RngState,
    /// Frames simulated so far
    pub time_ticks: u64,
    /// Cell ownership
    pub grid: Grid,
    /// The two moving tiles, updated in index order
    pub tiles: [MovingTile; 2],
    /// Canvas size in pixels
    pub canvas: Vec2,
    /// Moving tile edge length in pixels
    pub tile_size: f32,
    /// Per-axis speed limits
    pub band: SpeedBand,
    /// Half-width of the per-frame velocity jitter
    pub jitter: f32,
}

impl SimState {
    /// Build the starting grid and tiles for `config`
    pub fn new(config: &SimConfig, seed: u64) -> Self {
        let (width, height) = config.grid_dims();
        let (extra_x, extra_y) = config.leftover_px();
        if extra_x > 0 || extra_y > 0 {
            log::warn!(
                "Canvas {}x{} is not a whole number of {}px cells; {}x{}px left uncovered",
                config.canvas_width,
                config.canvas_height,
                config.cell_size,
                extra_x,
                extra_y
            );
        }

        let canvas = config.canvas_size();
        let state = Self {
            rng_state: RngState::new(seed),
            time_ticks: 0,
            grid: Grid::split(width, height, config.cell_size as f32),
            tiles: MovingTile::starting_pair(canvas, config.initial_speed),
            canvas,
            tile_size: config.tile_size,
            band: SpeedBand::new(config.min_speed, config.max_speed),
            jitter: config.jitter,
        };

        log::debug!(
            "Simulation created: {}x{} grid, score {}",
            width,
            height,
            state.score()
        );
        state
    }

    /// Half the tile edge: probe radius and wall margin
    #[inline]
    pub fn half_tile(&self) -> f32 {
        self.tile_size / 2.0
    }

    /// Current per-team cell counts
    pub fn score(&self) -> Score {
        Score::tally(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::Team;

    #[test]
    fn test_default_state() {
        let state = SimState::new(&SimConfig::default(), 7);
        assert_eq!(state.grid.width(), 15);
        assert_eq!(state.grid.height(), 15);
        assert_eq!(state.score(), Score { indigo: 120, amber: 105 });
        assert_eq!(state.tiles[0].capture, Team::Indigo);
        assert_eq!(state.tiles[1].capture, Team::Amber);
        assert_eq!(state.half_tile(), 19.0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_rng_state_reproducible() {
        use rand::Rng;
        let rng_state = RngState::new(99);
        let a: u32 = rng_state.to_rng().random();
        let b: u32 = rng_state.to_rng().random();
        assert_eq!(a, b);
    }
}
