//! End-of-round resolution
//!
//! When the countdown runs out the board flips, the reference Center in the
//! objective column is located, the objective symbol next to it is picked,
//! and the player's cell is checked against the segment between the two.
//!
//! Iteration order is part of the contract: the Center search scans the
//! column top to bottom, and candidates are tried in up/down/left/right
//! probe order. The first match wins in both cases.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::{Board, BoardPosition, TileState};
use crate::consts::{COLUMN_GROUPS, NUM_COLS, NUM_ROWS};

/// Symbol the player has to triangulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveSymbol {
    Alpha,
    Beta,
}

impl ObjectiveSymbol {
    pub fn tile_state(self) -> TileState {
        match self {
            ObjectiveSymbol::Alpha => TileState::Alpha,
            ObjectiveSymbol::Beta => TileState::Beta,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectiveSymbol::Alpha => "Alpha",
            ObjectiveSymbol::Beta => "Beta",
        }
    }
}

/// Round objective: a symbol and a column group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub symbol: ObjectiveSymbol,
    /// 0..4, selects board column `2 * group`
    pub column_group: u8,
}

impl Objective {
    pub fn new(symbol: ObjectiveSymbol, column_group: u8) -> Self {
        debug_assert!(column_group < COLUMN_GROUPS);
        Self {
            symbol,
            column_group,
        }
    }

    /// Uniform draw over both symbols and all column groups
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let symbol = if rng.random_bool(0.5) {
            ObjectiveSymbol::Alpha
        } else {
            ObjectiveSymbol::Beta
        };
        Self::new(symbol, rng.random_range(0..COLUMN_GROUPS))
    }

    /// Board column probed for the reference Center
    pub fn column(&self) -> usize {
        self.column_group as usize * 2
    }
}

/// Outcome of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resolution {
    pub won: bool,
    /// Reference Center marker, unset if none was found
    pub center: Option<BoardPosition>,
    /// Objective marker; on a win this is the player's cell
    pub objective: Option<BoardPosition>,
}

impl Resolution {
    /// No objective could be located: a loss with no markers
    pub fn unresolved() -> Self {
        Self::default()
    }

    /// Both marker endpoints, when the round located an objective
    pub fn tether(&self) -> Option<(BoardPosition, BoardPosition)> {
        Some((self.center?, self.objective?))
    }
}

/// Flip the board and resolve the round against `objective`.
///
/// Clears any hover mark first. Degenerate boards yield
/// [`Resolution::unresolved`], never a panic.
pub fn resolve(board: &mut Board, objective: Objective) -> Resolution {
    board.clear_state(TileState::Hover);
    board.reflect_symbols();

    let Some(center) = find_center(board, objective.column()) else {
        log::debug!("No Center in column {}", objective.column());
        return Resolution::unresolved();
    };

    let candidates = board.two_step_neighbors(center, objective.symbol.tile_state());
    let Some(target) = disambiguate(board, &candidates) else {
        log::debug!(
            "No {} resolves around Center {:?} ({} candidates)",
            objective.symbol.as_str(),
            center,
            candidates.len()
        );
        return Resolution::unresolved();
    };

    let player = board.find(TileState::PlayerChoice);
    let won = player.is_some_and(|p| is_between(p, center, target));
    log::debug!(
        "Center {:?}, objective {:?}, player {:?}, won {}",
        center,
        target,
        player,
        won
    );

    Resolution {
        won,
        center: Some(center),
        objective: if won { player } else { Some(target) },
    }
}

/// Topmost Center in `col`; off-board columns have none
pub fn find_center(board: &Board, col: usize) -> Option<BoardPosition> {
    if col >= NUM_COLS {
        return None;
    }
    (0..NUM_ROWS)
        .map(|row| BoardPosition::new(row, col))
        .find(|&p| board.state(p) == TileState::Center)
}

/// Pick the resolved objective among the probed candidates.
///
/// A lone candidate always wins. With several, the first one that has
/// exactly one Center two steps away is taken.
pub fn disambiguate(board: &Board, candidates: &[BoardPosition]) -> Option<BoardPosition> {
    match candidates {
        [] => None,
        [only] => Some(*only),
        _ => candidates
            .iter()
            .copied()
            .find(|&c| board.two_step_neighbors(c, TileState::Center).len() == 1),
    }
}

/// True if `player` shares a row or column with both endpoints and lies
/// strictly between them.
pub fn is_between(player: BoardPosition, center: BoardPosition, objective: BoardPosition) -> bool {
    fn strictly_inside(v: usize, a: usize, b: usize) -> bool {
        v > a.min(b) && v < a.max(b)
    }

    if player.row == center.row && center.row == objective.row {
        strictly_inside(player.col, center.col, objective.col)
    } else if player.col == center.col && center.col == objective.col {
        strictly_inside(player.row, center.row, objective.row)
    } else {
        false
    }
}
