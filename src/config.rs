//! Simulation configuration
//!
//! Read from LocalStorage on the web and from a JSON file on native.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Cell size of zero would make an empty grid
    #[error("cell size must be positive")]
    ZeroCellSize,

    /// Canvas cannot hold a single whole cell
    #[error("canvas {width}x{height} is smaller than one {cell_size}px cell")]
    CanvasTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    /// Tile size must be a positive finite number
    #[error("invalid tile size: {0}")]
    InvalidTileSize(f32),

    /// Speed band is non-finite, non-positive or inverted
    #[error("invalid speed band: min {min}, max {max}")]
    InvalidSpeedBand { min: f32, max: f32 },

    /// Jitter must be a non-negative finite number
    #[error("invalid jitter: {0}")]
    InvalidJitter(f32),
}

/// Canvas geometry, speed band and RNG seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Grid cell edge length in pixels
    pub cell_size: u32,
    /// Moving tile edge length in pixels
    pub tile_size: f32,

    /// Lower bound on each velocity axis magnitude
    pub min_speed: f32,
    /// Upper bound on each velocity axis magnitude
    pub max_speed: f32,
    /// Initial per-axis speed of both tiles
    pub initial_speed: f32,
    /// Half-width of the per-frame velocity perturbation
    pub jitter: f32,

    /// RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
    /// Frames to run when there is no display to drive the loop
    pub headless_frames: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            cell_size: CELL_SIZE,
            tile_size: TILE_SIZE,

            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            initial_speed: INITIAL_SPEED,
            jitter: JITTER,

            seed: None,
            headless_frames: HEADLESS_FRAMES,
        }
    }
}

impl SimConfig {
    /// Check the configuration can drive a simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.canvas_width < self.cell_size || self.canvas_height < self.cell_size {
            return Err(ConfigError::CanvasTooSmall {
                width: self.canvas_width,
                height: self.canvas_height,
                cell_size: self.cell_size,
            });
        }
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        let band_ok = self.min_speed.is_finite()
            && self.max_speed.is_finite()
            && self.min_speed > 0.0
            && self.min_speed <= self.max_speed;
        if !band_ok {
            return Err(ConfigError::InvalidSpeedBand {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(ConfigError::InvalidJitter(self.jitter));
        }
        Ok(())
    }

    /// Grid dimensions in whole cells; partial edge cells are dropped
    pub fn grid_dims(&self) -> (usize, usize) {
        if self.cell_size == 0 {
            return (0, 0);
        }
        (
            (self.canvas_width / self.cell_size) as usize,
            (self.canvas_height / self.cell_size) as usize,
        )
    }

    /// Pixels left uncovered by the grid on the right and bottom edges
    pub fn leftover_px(&self) -> (u32, u32) {
        if self.cell_size == 0 {
            return (self.canvas_width, self.canvas_height);
        }
        (
            self.canvas_width % self.cell_size,
            self.canvas_height % self.cell_size,
        )
    }

    /// Canvas size as a vector
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width as f32, self.canvas_height as f32)
    }

    /// Parse a JSON config, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str::<SimConfig>(json) {
            Ok(config) => config.or_default(),
            Err(e) => {
                log::warn!("Ignoring unreadable config: {}", e);
                Self::default()
            }
        }
    }

    /// Keep this config if it validates, otherwise log and use defaults
    fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Ignoring invalid config: {}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "tile_clash_config";

    /// Environment variable naming a JSON config file (native)
    pub const CONFIG_ENV: &'static str = "TILE_CLASH_CONFIG";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded config from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load config from the file named by `TILE_CLASH_CONFIG` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var_os(Self::CONFIG_ENV) {
            Some(path) => Self::load_file(std::path::Path::new(&path)),
            None => {
                log::info!("Using default config");
                Self::default()
            }
        }
    }

    /// Read a JSON config file, falling back to defaults if it is missing
    /// or invalid
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded config from {}", path.display());
                Self::from_json_or_default(&json)
            }
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
