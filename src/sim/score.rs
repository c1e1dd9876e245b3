//! Per-team cell tally

use serde::{Deserialize, Serialize};

use super::grid::{Grid, Team};

/// Cells owned by each team, recounted from the grid every frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub indigo: usize,
    pub amber: usize,
}

impl Score {
    /// Count the grid
    pub fn tally(grid: &Grid) -> Self {
        let indigo = grid.count(Team::Indigo);
        Self {
            indigo,
            amber: grid.len() - indigo,
        }
    }

    pub fn get(&self, team: Team) -> usize {
        match team {
            Team::Indigo => self.indigo,
            Team::Amber => self.amber,
        }
    }

    pub fn total(&self) -> usize {
        self.indigo + self.amber
    }

    /// Team holding more cells, None on a tie
    pub fn leader(&self) -> Option<Team> {
        match self.indigo.cmp(&self.amber) {
            std::cmp::Ordering::Greater => Some(Team::Indigo),
            std::cmp::Ordering::Less => Some(Team::Amber),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.indigo, self.amber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_initial_split() {
        let score = Score::tally(&Grid::split(15, 15, 38.0));
        assert_eq!(score, Score { indigo: 120, amber: 105 });
        assert_eq!(score.total(), 225);
        assert_eq!(score.leader(), Some(Team::Indigo));
        assert_eq!(score.to_string(), "120 x 105");
    }

    #[test]
    fn test_tally_tracks_flips() {
        let mut grid = Grid::split(4, 4, 10.0);
        grid.set(3, 3, Team::Indigo);
        let score = Score::tally(&grid);
        assert_eq!(score.get(Team::Indigo), 9);
        assert_eq!(score.get(Team::Amber), 7);

        grid.set(0, 0, Team::Amber);
        assert_eq!(Score::tally(&grid).leader(), None);
    }
}
