//! Frame composition
//!
//! Read-only pass over the session state, run once per frame after the tick.

use glam::Vec2;

use super::DrawSurface;
use super::text::Labels;
use crate::Settings;
use crate::sim::{Board, GamePhase, GameState, ObjectiveSymbol, RoundSession, TileState};

/// Draw the whole screen for the current phase
pub fn draw_frame<S: DrawSurface>(
    surface: &mut S,
    state: &GameState,
    labels: &Labels<S::Image>,
    settings: &Settings,
) {
    match state.phase {
        GamePhase::Standby => {
            draw_button(surface, state, labels, settings);
            draw_markers(surface, labels, settings);
        }
        GamePhase::Playing => {
            if let Some(round) = state.round() {
                draw_board(surface, &round.board, settings);
                draw_time_bar(surface, round, settings);
                draw_markers(surface, labels, settings);
                draw_objective(surface, round, labels, settings);
            }
        }
        GamePhase::Resolved => {
            draw_button(surface, state, labels, settings);
            if let Some(round) = state.round() {
                draw_board(surface, &round.board, settings);
                draw_markers(surface, labels, settings);
                draw_objective(surface, round, labels, settings);
                draw_tether(surface, round, settings);
                draw_status(surface, round, labels, settings);
            }
        }
    }
}

fn draw_button<S: DrawSurface>(
    surface: &mut S,
    state: &GameState,
    labels: &Labels<S::Image>,
    settings: &Settings,
) {
    let p = &settings.palette;
    let origin = settings.button_origin();
    let color = if state.button_hot { p.green } else { p.dark_green };
    surface.draw_filled_rect(origin, settings.button_size, color);
    surface.draw_image(
        &labels.button,
        origin + settings.button_label_offset,
        [1.0, 1.0, 1.0, 0.5],
    );
}

fn draw_markers<S: DrawSurface>(surface: &mut S, labels: &Labels<S::Image>, settings: &Settings) {
    for (i, marker) in labels.markers.iter().enumerate() {
        let pos = settings.marker_origin + Vec2::new(settings.marker_step * i as f32, 0.0);
        surface.draw_image(marker, pos, [1.0; 4]);
    }
}

fn draw_board<S: DrawSurface>(surface: &mut S, board: &Board, settings: &Settings) {
    let p = &settings.palette;
    let r = settings.tile_radius;
    for (_, tile) in board.iter() {
        let (radius, sides, rotation, color) = match tile.state {
            TileState::Alpha => (r, 3, tile.rotation - 90.0, p.red),
            TileState::Beta => (r, 4, tile.rotation - 45.0, p.yellow),
            TileState::Center => (r, 6, tile.rotation, p.blue),
            TileState::Hover => (r * 1.5, 4, tile.rotation - 45.0, p.light_gray),
            TileState::PlayerChoice => (r * 1.5, 4, tile.rotation - 45.0, p.white),
            TileState::Empty => (r * 1.5, 4, tile.rotation - 45.0, p.gray),
            TileState::Invalid => continue,
        };
        surface.draw_filled_polygon(tile.pos, radius, sides, rotation, color);
    }
}

fn draw_time_bar<S: DrawSurface>(surface: &mut S, round: &RoundSession, settings: &Settings) {
    let p = &settings.palette;
    let fill = round.time_left / settings.max_time * settings.bar_size.x;
    surface.draw_filled_rect(settings.bar_origin, Vec2::new(fill, settings.bar_size.y), p.red);
    surface.stroke_rect(settings.bar_origin, settings.bar_size, settings.bar_outline, p.white);
}

fn draw_objective<S: DrawSurface>(
    surface: &mut S,
    round: &RoundSession,
    labels: &Labels<S::Image>,
    settings: &Settings,
) {
    let image = match round.objective.symbol {
        ObjectiveSymbol::Alpha => &labels.alpha,
        ObjectiveSymbol::Beta => &labels.beta,
    };
    let tint = settings.palette.column_group(round.objective.column_group);
    surface.draw_image(image, settings.objective_label_pos, tint);
}

/// Line from the Center marker to the objective marker
fn draw_tether<S: DrawSurface>(surface: &mut S, round: &RoundSession, settings: &Settings) {
    let Some((center, objective)) = round.resolution.and_then(|r| r.tether()) else {
        return;
    };
    let a = round.board.tile(center).pos;
    let b = round.board.tile(objective).pos;
    let w = settings.tether_width;

    let (origin, size) = if a.y == b.y {
        (Vec2::new(a.x.min(b.x), a.y), Vec2::new((b.x - a.x).abs(), w))
    } else {
        (Vec2::new(a.x, a.y.min(b.y)), Vec2::new(w, (b.y - a.y).abs()))
    };
    surface.draw_filled_rect(origin, size, settings.palette.dark_purple);
}

fn draw_status<S: DrawSurface>(
    surface: &mut S,
    round: &RoundSession,
    labels: &Labels<S::Image>,
    settings: &Settings,
) {
    let image = if round.won() { &labels.win } else { &labels.lose };
    surface.draw_image(image, settings.status_label_pos, [1.0; 4]);
}
