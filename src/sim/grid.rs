//! Two-team ownership grid
//!
//! Cells are stored column-major so `cells[i * height + j]` is column `i`,
//! row `j`. Every cell always belongs to exactly one team.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Cell ownership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Starts with the left half of the grid
    Indigo,
    /// Starts with the right half of the grid
    Amber,
}

impl Team {
    /// The other team
    #[inline]
    pub fn opponent(self) -> Team {
        match self {
            Team::Indigo => Team::Amber,
            Team::Amber => Team::Indigo,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Indigo => "Indigo",
            Team::Amber => "Amber",
        }
    }
}

/// Fixed-size grid of cell owners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: f32,
    cells: Vec<Team>,
}

impl Grid {
    /// Create a grid split down the middle: column `i` is Indigo when
    /// `2 * i < width`, Amber otherwise
    pub fn split(width: usize, height: usize, cell_size: f32) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for i in 0..width {
            let team = if 2 * i < width { Team::Indigo } else { Team::Amber };
            cells.extend(std::iter::repeat_n(team, height));
        }
        Self {
            width,
            height,
            cell_size,
            cells,
        }
    }

    /// Columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell edge length in pixels
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.width && j < self.height,
            "cell ({i}, {j}) outside {}x{} grid",
            self.width,
            self.height
        );
        i * self.height + j
    }

    /// Owner of cell `(i, j)`. Panics when out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Team {
        self.cells[self.index(i, j)]
    }

    /// Set the owner of cell `(i, j)`. Panics when out of range.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, team: Team) {
        let idx = self.index(i, j);
        self.cells[idx] = team;
    }

    /// Grid cell containing a pixel-space point, if the point is on the grid
    pub fn cell_at_point(&self, p: Vec2) -> Option<(usize, usize)> {
        let fi = (p.x / self.cell_size).floor();
        let fj = (p.y / self.cell_size).floor();
        if fi.is_nan() || fj.is_nan() || fi < 0.0 || fj < 0.0 {
            return None;
        }
        let (i, j) = (fi as usize, fj as usize);
        (i < self.width && j < self.height).then_some((i, j))
    }

    /// Number of cells owned by `team`
    pub fn count(&self, team: Team) -> usize {
        self.cells.iter().filter(|&&c| c == team).count()
    }

    /// All cells as `(i, j, team)`, column by column
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Team)> + '_ {
        let height = self.height;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &team)| (idx / height, idx % height, team))
    }
}
