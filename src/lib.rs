//! Concepts Trainer - a hexagon board reflex trainer
//!
//! Core modules:
//! - `sim`: Board model, round lifecycle and the end-of-round resolution
//! - `renderer`: Drawing-surface abstraction and frame composition
//! - `platform`: Clock and input-source abstraction
//! - `settings`: Immutable configuration built once at startup

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{Palette, Settings};

/// Board and round constants
pub mod consts {
    use crate::sim::TileState;

    /// Board dimensions
    pub const NUM_ROWS: usize = 5;
    pub const NUM_COLS: usize = 7;

    /// Countdown maximum (seconds)
    pub const MAX_TIME: f32 = 15.0;

    /// Number of objective column groups (columns 0, 2, 4, 6)
    pub const COLUMN_GROUPS: u8 = 4;

    /// Cells that are never playable, as (row, col)
    pub const INVALID_CELLS: [(usize, usize); 6] = [(1, 1), (3, 1), (1, 3), (3, 3), (1, 5), (3, 5)];

    /// Symbol layout applied on every reset, as (row, col, state)
    pub const SYMBOL_LAYOUT: [(usize, usize, TileState); 12] = [
        (0, 0, TileState::Beta),
        (2, 0, TileState::Center),
        (4, 0, TileState::Alpha),
        (0, 2, TileState::Center),
        (2, 2, TileState::Alpha),
        (4, 2, TileState::Beta),
        (0, 4, TileState::Beta),
        (2, 4, TileState::Beta),
        (4, 4, TileState::Center),
        (0, 6, TileState::Alpha),
        (2, 6, TileState::Center),
        (4, 6, TileState::Alpha),
    ];
}

/// Strict point-in-rectangle test (edges excluded)
#[inline]
pub fn point_in_rect(point: glam::Vec2, origin: glam::Vec2, size: glam::Vec2) -> bool {
    point.x > origin.x
        && point.x < origin.x + size.x
        && point.y > origin.y
        && point.y < origin.y + size.y
}
