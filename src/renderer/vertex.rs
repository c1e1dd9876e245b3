//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Team palette
pub mod colors {
    use crate::sim::Team;

    /// #4E418C
    pub const INDIGO: [f32; 4] = [78.0 / 255.0, 65.0 / 255.0, 140.0 / 255.0, 1.0];
    /// #F9AB2D
    pub const AMBER: [f32; 4] = [249.0 / 255.0, 171.0 / 255.0, 45.0 / 255.0, 1.0];
    /// Shows through the strip the grid does not cover
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// Fill color for cells owned by `team`
    pub fn team_color(team: Team) -> [f32; 4] {
        match team {
            Team::Indigo => INDIGO,
            Team::Amber => AMBER,
        }
    }

    /// CSS hex for `team`, used by the score HUD
    pub fn team_hex(team: Team) -> &'static str {
        match team {
            Team::Indigo => "#4E418C",
            Team::Amber => "#F9AB2D",
        }
    }

    /// Convert a float color to RGBA8
    pub fn to_rgba8(color: [f32; 4]) -> [u8; 4] {
        color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::colors::*;
    use crate::sim::Team;

    #[test]
    fn test_palette_round_trips_to_hex() {
        assert_eq!(to_rgba8(team_color(Team::Indigo)), [0x4E, 0x41, 0x8C, 0xFF]);
        assert_eq!(to_rgba8(team_color(Team::Amber)), [0xF9, 0xAB, 0x2D, 0xFF]);
        assert_eq!(team_hex(Team::Amber), "#F9AB2D");
    }
}
