//! Moving tiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::Team;

/// A tile bouncing across the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingTile {
    /// Center position (pixels)
    pub pos: Vec2,
    /// Velocity (pixels/frame)
    pub vel: Vec2,
    /// Team painted onto cells this tile touches
    pub capture: Team,
    /// Team whose cells count as a hit; also the tile's body color
    pub trigger: Team,
}

impl MovingTile {
    pub fn new(pos: Vec2, vel: Vec2, capture: Team) -> Self {
        Self {
            pos,
            vel,
            capture,
            trigger: capture.opponent(),
        }
    }

    /// The pair of tiles the simulation starts with: one in each half,
    /// launched diagonally toward each other's territory
    pub fn starting_pair(canvas: Vec2, speed: f32) -> [MovingTile; 2] {
        [
            MovingTile::new(
                Vec2::new(canvas.x / 4.0, canvas.y / 2.0),
                Vec2::new(speed, -speed),
                Team::Indigo,
            ),
            MovingTile::new(
                Vec2::new(canvas.x / 4.0 * 3.0, canvas.y / 2.0),
                Vec2::new(-speed, speed),
                Team::Amber,
            ),
        ]
    }

    /// Whether a cell owned by `team` stops this tile
    #[inline]
    pub fn collides_with(&self, team: Team) -> bool {
        team != self.capture
    }

    /// Move by one frame of velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Position after one more frame at the current velocity
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }
}
