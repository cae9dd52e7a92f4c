//! Board simulation module
//!
//! Deterministic apart from the clock readings and pointer snapshots fed in
//! through [`TickInput`].

pub mod board;
pub mod resolve;
pub mod state;
pub mod tick;

pub use board::{Board, BoardPosition, Tile, TileState};
pub use resolve::{Objective, ObjectiveSymbol, Resolution, resolve};
pub use state::{GamePhase, GameState, RngState, RoundSession};
pub use tick::{TickInput, hit_cell, tick};
