//! Legality and win detection for tic-tac-toe.

use tracing::instrument;

use super::board::{Cell, Player, TicTacToeBoard, CELL_COUNT};
use crate::error::MoveErrorKind;
use crate::rules::Outcome;

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[must_use]
pub fn check_winner(board: &TicTacToeBoard) -> Option<Player> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Mark(p) if cells[b] == cells[a] && cells[c] == cells[a] => Some(p),
        _ => None,
    })
}

/// Outcome of the board. A completed line wins even on a full board.
#[must_use]
pub fn outcome(board: &TicTacToeBoard) -> Outcome<Player> {
    if let Some(player) = check_winner(board) {
        Outcome::Win(player)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Validates `mover` marking `cell`.
#[instrument(skip(board))]
pub fn validate(board: &TicTacToeBoard, cell: usize, mover: Player) -> Result<(), MoveErrorKind> {
    if cell >= CELL_COUNT {
        return Err(MoveErrorKind::CellOutOfRange { cell });
    }
    if outcome(board).is_terminal() {
        return Err(MoveErrorKind::GameOver);
    }
    if board.to_move() != mover {
        return Err(MoveErrorKind::NotYourTurn);
    }
    if !board.is_empty(cell) {
        return Err(MoveErrorKind::Occupied);
    }
    Ok(())
}

/// Checks if `mover` may mark `cell`.
#[must_use]
pub fn is_legal(board: &TicTacToeBoard, cell: usize, mover: Player) -> bool {
    validate(board, cell, mover).is_ok()
}
