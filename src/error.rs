//! Move rejection errors.
//!
//! The public move path rejects silently; `try_human_move` surfaces the reason.

use derive_more::{Display, Error};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveErrorKind {
    /// Tic-tac-toe cell index outside 0-8.
    #[display("cell {cell} is outside the board")]
    CellOutOfRange {
        /// The requested cell.
        cell: usize,
    },
    /// Chess coordinate outside the 8x8 board.
    #[display("square ({row}, {col}) is outside the board")]
    SquareOutOfRange {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },
    /// Tic-tac-toe cell already marked.
    #[display("cell is already occupied")]
    Occupied,
    /// The mover is not the side to move.
    #[display("not your turn")]
    NotYourTurn,
    /// The game already has an outcome.
    #[display("game is over")]
    GameOver,
    /// The move breaks the piece's movement rules.
    #[display("illegal move")]
    IllegalMove,
    /// The move belongs to the other game.
    #[display("move does not match the game being played")]
    VariantMismatch,
}

/// Move rejection with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Move rejected: {} at {}:{}", kind, file, line)]
pub struct MoveError {
    /// Rejection reason.
    pub kind: MoveErrorKind,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl MoveError {
    /// Creates a new move error with caller location tracking.
    #[track_caller]
    pub fn new(kind: MoveErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<MoveErrorKind> for MoveError {
    #[track_caller]
    fn from(kind: MoveErrorKind) -> Self {
        Self::new(kind)
    }
}
