//! Frame painter and score readout

use super::surface::{Rect, Surface};
use super::vertex::colors::{BACKGROUND, team_color, team_hex};
use crate::sim::{SimState, Score, Team};

/// Paint the grid and both tiles, and return the score shown with them
pub fn draw_frame<S: Surface + ?Sized>(state: &SimState, surface: &mut S) -> Score {
    surface.clear(BACKGROUND);

    let cell = state.grid.cell_size();
    for (i, j, team) in state.grid.iter() {
        let rect = Rect::new(i as f32 * cell, j as f32 * cell, cell, cell);
        surface.fill_rect(rect, team_color(team));
    }

    for tile in &state.tiles {
        let rect = Rect::centered(tile.pos.x, tile.pos.y, state.tile_size);
        surface.fill_rect(rect, team_color(tile.trigger));
    }

    state.score()
}

/// Score markup: each count in its team's color, `indigo x amber`
pub fn score_html(score: &Score) -> String {
    format!(
        "<span style=\"color: {}\">{}</span> x <span style=\"color: {}\">{}</span>",
        team_hex(Team::Indigo),
        score.indigo,
        team_hex(Team::Amber),
        score.amber
    )
}
