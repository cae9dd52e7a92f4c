//! Per-frame update
//!
//! One call per frame, before drawing. The countdown drains by measured
//! wall-clock time, so the round lasts the same in real seconds at any
//! frame rate.

use std::time::Instant;

use glam::Vec2;

use super::board::{Board, BoardPosition, TileState};
use super::state::{GamePhase, GameState};
use crate::{Settings, point_in_rect};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Pointer position in screen pixels
    pub cursor: Vec2,
    /// Primary button held this tick
    pub primary_down: bool,
    /// Clock reading for this tick
    pub now: Instant,
}

impl TickInput {
    /// Idle input (pointer parked at the origin, nothing pressed)
    pub fn at(now: Instant) -> Self {
        Self {
            cursor: Vec2::ZERO,
            primary_down: false,
            now,
        }
    }
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, settings: &Settings) {
    match state.phase {
        GamePhase::Standby | GamePhase::Resolved => update_button(state, input, settings),
        GamePhase::Playing => {
            let Some(round) = state.round_mut() else {
                log::warn!("Playing without a round, back to standby");
                state.phase = GamePhase::Standby;
                return;
            };

            let dt = input
                .now
                .saturating_duration_since(round.last_update)
                .as_secs_f32();
            if round.advance_timer(input.now) {
                state.end_round();
                return;
            }

            round.board.animate(dt, settings.spin_speed);
            handle_pointer(&mut round.board, input, settings);
        }
    }
}

/// Start / try-again button
fn update_button(state: &mut GameState, input: &TickInput, settings: &Settings) {
    state.button_hot = point_in_rect(input.cursor, settings.button_origin(), settings.button_size);
    if state.button_hot && input.primary_down {
        state.start_round(settings, input.now);
    }
}

/// Hover or pick the cell under the pointer
fn handle_pointer(board: &mut Board, input: &TickInput, settings: &Settings) {
    let Some(pos) = hit_cell(board, input.cursor, settings) else {
        return;
    };
    let state = if input.primary_down {
        TileState::PlayerChoice
    } else {
        TileState::Hover
    };
    board.set_tile(pos, state);
}

/// First selectable cell (Empty or Hover) whose hit box contains `point`
pub fn hit_cell(board: &Board, point: Vec2, settings: &Settings) -> Option<BoardPosition> {
    let half = settings.hit_radius();
    board
        .iter()
        .filter(|(_, t)| matches!(t.state, TileState::Empty | TileState::Hover))
        .find(|(_, t)| point_in_rect(point, t.pos - Vec2::splat(half), Vec2::splat(half * 2.0)))
        .map(|(p, _)| p)
}
