//! Board model
//!
//! A fixed 5×7 grid of tiles. Spatial queries on the board
//! (what is where, what is two steps away) live here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Settings;
use crate::consts::{INVALID_CELLS, NUM_COLS, NUM_ROWS, SYMBOL_LAYOUT};

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Empty,
    Alpha,
    Beta,
    Center,
    /// Pointer is over this cell
    Hover,
    /// Cell picked by the player
    PlayerChoice,
    /// Layout gap, never playable
    Invalid,
}

impl TileState {
    /// Alpha, Beta and Center tiles move with the board flip
    pub fn is_symbol(self) -> bool {
        matches!(self, TileState::Alpha | TileState::Beta | TileState::Center)
    }

    /// States that hold at most one cell at a time
    pub fn is_exclusive(self) -> bool {
        matches!(self, TileState::Hover | TileState::PlayerChoice)
    }
}

/// Grid coordinates of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardPosition {
    pub row: usize,
    pub col: usize,
}

impl BoardPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position after a 180° rotation about the board center
    pub fn reflected(self) -> Self {
        Self {
            row: NUM_ROWS - 1 - self.row,
            col: NUM_COLS - 1 - self.col,
        }
    }

    /// The four cells two steps away, in probe order: up, down, left, right.
    /// Off-board probes are skipped.
    pub fn two_step_probes(self) -> impl Iterator<Item = BoardPosition> {
        let Self { row, col } = self;
        [
            row.checked_sub(2).map(|r| Self::new(r, col)),
            (row + 2 < NUM_ROWS).then(|| Self::new(row + 2, col)),
            col.checked_sub(2).map(|c| Self::new(row, c)),
            (col + 2 < NUM_COLS).then(|| Self::new(row, col + 2)),
        ]
        .into_iter()
        .flatten()
    }
}

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub state: TileState,
    /// Pixel center, fixed at layout time
    pub pos: Vec2,
    /// Spin animation angle in degrees
    pub rotation: f32,
}

/// The 5×7 tile grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: [[Tile; NUM_COLS]; NUM_ROWS],
}

impl Board {
    /// Lay out a fresh board with the fixed symbol pattern
    pub fn new(settings: &Settings) -> Self {
        let mut tiles = [[Tile {
            state: TileState::Empty,
            pos: Vec2::ZERO,
            rotation: 0.0,
        }; NUM_COLS]; NUM_ROWS];

        for (r, row) in tiles.iter_mut().enumerate() {
            for (c, tile) in row.iter_mut().enumerate() {
                tile.pos = settings.tile_position(r, c);
            }
        }

        let mut board = Self { tiles };
        for &(r, c) in &INVALID_CELLS {
            board.tiles[r][c].state = TileState::Invalid;
        }
        for &(r, c, state) in &SYMBOL_LAYOUT {
            board.set_tile(BoardPosition::new(r, c), state);
        }
        board
    }

    pub fn tile(&self, pos: BoardPosition) -> &Tile {
        &self.tiles[pos.row][pos.col]
    }

    pub fn state(&self, pos: BoardPosition) -> TileState {
        self.tile(pos).state
    }

    /// All positions in row-major order
    pub fn positions() -> impl Iterator<Item = BoardPosition> {
        (0..NUM_ROWS).flat_map(|r| (0..NUM_COLS).map(move |c| BoardPosition::new(r, c)))
    }

    /// Tiles with their positions, row-major
    pub fn iter(&self) -> impl Iterator<Item = (BoardPosition, &Tile)> + '_ {
        Self::positions().map(move |p| (p, self.tile(p)))
    }

    /// Set a cell's state and restart its animation.
    ///
    /// Hover and PlayerChoice are exclusive: any previous holder reverts to Empty.
    pub fn set_tile(&mut self, pos: BoardPosition, state: TileState) {
        if state.is_exclusive() {
            self.clear_state(state);
        }
        let tile = &mut self.tiles[pos.row][pos.col];
        tile.state = state;
        tile.rotation = 0.0;
    }

    /// Every cell holding `state` becomes Empty
    pub fn clear_state(&mut self, state: TileState) {
        for tile in self.tiles.iter_mut().flatten() {
            if tile.state == state {
                tile.state = TileState::Empty;
            }
        }
    }

    /// First cell in row-major order holding `state`
    pub fn find(&self, state: TileState) -> Option<BoardPosition> {
        Self::positions().find(|&p| self.state(p) == state)
    }

    pub fn count(&self, state: TileState) -> usize {
        self.tiles.iter().flatten().filter(|t| t.state == state).count()
    }

    /// Cells two steps from `pos` holding `state`, in up/down/left/right order
    pub fn two_step_neighbors(&self, pos: BoardPosition, state: TileState) -> Vec<BoardPosition> {
        pos.two_step_probes()
            .filter(|&p| self.state(p) == state)
            .collect()
    }

    /// Spin symbol tiles
    pub fn animate(&mut self, dt: f32, spin_speed: f32) {
        for tile in self.tiles.iter_mut().flatten() {
            if tile.state.is_symbol() {
                tile.rotation += spin_speed * dt;
            }
        }
    }

    /// Rotate the symbol layer 180° about the board center.
    ///
    /// Symbol cells are vacated first, then every symbol lands on its
    /// reflected cell. Cells that receive no symbol keep their state.
    pub fn reflect_symbols(&mut self) {
        let moved: Vec<(BoardPosition, TileState)> = self
            .iter()
            .filter(|(_, t)| t.state.is_symbol())
            .map(|(p, t)| (p.reflected(), t.state))
            .collect();

        self.clear_symbols();
        for (pos, state) in moved {
            self.set_tile(pos, state);
        }
    }

    fn clear_symbols(&mut self) {
        for tile in self.tiles.iter_mut().flatten() {
            if tile.state.is_symbol() {
                tile.state = TileState::Empty;
                tile.rotation = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board() -> Board {
        Board::new(&Settings::default())
    }

    fn pos(row: usize, col: usize) -> BoardPosition {
        BoardPosition::new(row, col)
    }

    #[test]
    fn test_reset_layout() {
        let board = board();
        assert_eq!(board.count(TileState::Invalid), 6);
        assert_eq!(board.count(TileState::Alpha), 4);
        assert_eq!(board.count(TileState::Beta), 4);
        assert_eq!(board.count(TileState::Center), 4);
        assert_eq!(board.count(TileState::Empty), 35 - 6 - 12);

        assert_eq!(board.state(pos(0, 0)), TileState::Beta);
        assert_eq!(board.state(pos(2, 0)), TileState::Center);
        assert_eq!(board.state(pos(4, 6)), TileState::Alpha);
        assert_eq!(board.state(pos(1, 3)), TileState::Invalid);
    }

    #[test]
    fn test_positions_fixed_at_layout() {
        let settings = Settings::default();
        let mut board = Board::new(&settings);
        board.set_tile(pos(1, 0), TileState::PlayerChoice);
        board.reflect_symbols();
        board.animate(1.0, 90.0);
        for (p, tile) in board.iter() {
            assert_eq!(tile.pos, settings.tile_position(p.row, p.col));
        }
    }

    #[test]
    fn test_exclusive_states() {
        let mut board = board();
        board.set_tile(pos(1, 0), TileState::Hover);
        board.set_tile(pos(3, 0), TileState::Hover);
        assert_eq!(board.count(TileState::Hover), 1);
        assert_eq!(board.state(pos(1, 0)), TileState::Empty);

        board.set_tile(pos(1, 0), TileState::PlayerChoice);
        board.set_tile(pos(1, 2), TileState::PlayerChoice);
        assert_eq!(board.count(TileState::PlayerChoice), 1);
        assert_eq!(board.find(TileState::PlayerChoice), Some(pos(1, 2)));
        // Picking a cell does not disturb the hover mark elsewhere
        assert_eq!(board.find(TileState::Hover), Some(pos(3, 0)));
    }

    #[test]
    fn test_set_tile_resets_rotation() {
        let mut board = board();
        board.animate(0.5, 60.0);
        assert_eq!(board.tile(pos(0, 0)).rotation, 30.0);
        assert_eq!(board.tile(pos(1, 0)).rotation, 0.0);
        board.set_tile(pos(0, 0), TileState::Alpha);
        assert_eq!(board.tile(pos(0, 0)).rotation, 0.0);
    }

    #[test]
    fn test_two_step_probes_bounds() {
        let corner: Vec<_> = pos(0, 0).two_step_probes().collect();
        assert_eq!(corner, vec![pos(2, 0), pos(0, 2)]);

        let middle: Vec<_> = pos(2, 2).two_step_probes().collect();
        assert_eq!(middle, vec![pos(0, 2), pos(4, 2), pos(2, 0), pos(2, 4)]);

        let far: Vec<_> = pos(4, 6).two_step_probes().collect();
        assert_eq!(far, vec![pos(2, 6), pos(4, 4)]);
    }

    #[test]
    fn test_reflect_fixed_layout() {
        let mut board = board();
        board.reflect_symbols();

        let expected = [
            (0, 0, TileState::Alpha),
            (0, 2, TileState::Center),
            (0, 4, TileState::Beta),
            (0, 6, TileState::Alpha),
            (2, 0, TileState::Center),
            (2, 2, TileState::Beta),
            (2, 4, TileState::Alpha),
            (2, 6, TileState::Center),
            (4, 0, TileState::Alpha),
            (4, 2, TileState::Beta),
            (4, 4, TileState::Center),
            (4, 6, TileState::Beta),
        ];
        for (r, c, state) in expected {
            assert_eq!(board.state(pos(r, c)), state, "cell ({}, {})", r, c);
        }
        assert_eq!(board.count(TileState::Invalid), 6);
    }

    #[test]
    fn test_reflect_keeps_non_symbol_cells() {
        let mut board = board();
        board.set_tile(pos(1, 0), TileState::PlayerChoice);
        board.reflect_symbols();
        assert_eq!(board.state(pos(1, 0)), TileState::PlayerChoice);
        assert_eq!(board.state(pos(3, 6)), TileState::Empty);
    }

    fn playable() -> Vec<BoardPosition> {
        Board::positions()
            .filter(|p| !INVALID_CELLS.contains(&(p.row, p.col)))
            .collect()
    }

    fn cell_state() -> impl Strategy<Value = TileState> {
        prop_oneof![
            Just(TileState::Empty),
            Just(TileState::Alpha),
            Just(TileState::Beta),
            Just(TileState::Center),
        ]
    }

    proptest! {
        #[test]
        fn prop_reflect_twice_restores_symbols(
            states in proptest::collection::vec(cell_state(), 29)
        ) {
            let mut board = board();
            for (p, s) in playable().into_iter().zip(states) {
                board.set_tile(p, s);
            }
            let before: Vec<TileState> = board.iter().map(|(_, t)| t.state).collect();

            board.reflect_symbols();
            board.reflect_symbols();

            let after: Vec<TileState> = board.iter().map(|(_, t)| t.state).collect();
            prop_assert_eq!(before, after);
        }
    }
}
