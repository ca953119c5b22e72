//! Tic-tac-toe board model.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Cell indices, at most nine of them.
pub type CellList = SmallVec<[usize; CELL_COUNT]>;

/// Mark owner. `First` is the human and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Plays X, moves first.
    First,
    /// Plays O, the engine.
    Second,
}

impl Player {
    /// Returns the opponent player.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Display symbol.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Mark(Player),
}

/// 3x3 board, cells in row-major order (0-8).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToeBoard {
    cells: [Cell; CELL_COUNT],
}

impl TicTacToeBoard {
    /// Creates a new empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells. Used to set up positions in tests.
    #[must_use]
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Checks if the cell at `index` exists and is empty.
    #[must_use]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Marks a cell. Callers validate the index first.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.cells[index] = Cell::Mark(player);
    }

    /// Clears a cell. Used by the search to undo a placement.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Empty cell indices in ascending order.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        (0..CELL_COUNT).filter(|&i| self.cells[i] == Cell::Empty).collect()
    }

    /// Checks if every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of marks owned by `player`.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Mark(player))
            .count()
    }

    /// Whose turn it is, derived from mark counts. `First` moves on equal counts.
    #[must_use]
    pub fn to_move(&self) -> Player {
        if self.count(Player::First) > self.count(Player::Second) {
            Player::Second
        } else {
            Player::First
        }
    }
}

impl std::fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            let symbols: Vec<String> = (0..3)
                .map(|col| match self.cells[row * 3 + col] {
                    Cell::Empty => " ".to_string(),
                    Cell::Mark(p) => p.symbol().to_string(),
                })
                .collect();
            writeln!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
