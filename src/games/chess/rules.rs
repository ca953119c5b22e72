//! Movement rules and king-capture detection.
//!
//! There is no check detection: a move that leaves the mover's king attacked
//! is still legal, and the game ends when a king is actually taken.

use tracing::instrument;

use super::board::{ChessBoard, ChessMove, Color, PieceKind, Square};
use crate::error::MoveErrorKind;
use crate::rules::Outcome;

/// Checks that every square strictly between `from` and `to` is empty.
///
/// Only meaningful for straight or diagonal lines.
#[must_use]
pub fn path_clear(board: &ChessBoard, from: Square, to: Square) -> bool {
    let dr = (i16::from(to.row()) - i16::from(from.row())).signum() as i8;
    let dc = (i16::from(to.col()) - i16::from(from.col())).signum() as i8;

    let mut current = from.offset(dr, dc);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(dr, dc);
    }
    true
}

fn pawn_move_ok(board: &ChessBoard, from: Square, to: Square, mover: Color) -> bool {
    let dir = i16::from(mover.pawn_direction());
    let dr = i16::from(to.row()) - i16::from(from.row());
    let col_diff = from.col().abs_diff(to.col());
    let target = board.get(to);

    match (dr, col_diff) {
        (d, 0) if d == dir => target.is_none(),
        (d, 0) if d == 2 * dir => {
            from.row() == mover.pawn_start_row() && target.is_none() && path_clear(board, from, to)
        }
        (d, 1) if d == dir => target.is_some_and(|p| p.color != mover),
        _ => false,
    }
}

/// Validates `mover` moving the piece on `from` to `to`.
#[instrument(skip(board))]
pub fn validate(board: &ChessBoard, from: Square, to: Square, mover: Color) -> Result<(), MoveErrorKind> {
    let piece = board.get(from).ok_or(MoveErrorKind::IllegalMove)?;
    if piece.color != mover {
        return Err(MoveErrorKind::NotYourTurn);
    }
    if board.get(to).is_some_and(|p| p.color == mover) {
        return Err(MoveErrorKind::IllegalMove);
    }

    let row_diff = from.row().abs_diff(to.row());
    let col_diff = from.col().abs_diff(to.col());
    let straight = (row_diff == 0) != (col_diff == 0);
    let diagonal = row_diff == col_diff;

    let ok = match piece.kind {
        PieceKind::Pawn => pawn_move_ok(board, from, to, mover),
        PieceKind::Rook => straight && path_clear(board, from, to),
        PieceKind::Bishop => diagonal && path_clear(board, from, to),
        PieceKind::Queen => (straight || diagonal) && path_clear(board, from, to),
        PieceKind::Knight => matches!((row_diff, col_diff), (2, 1) | (1, 2)),
        PieceKind::King => row_diff <= 1 && col_diff <= 1,
    };

    if ok {
        Ok(())
    } else {
        Err(MoveErrorKind::IllegalMove)
    }
}

/// Checks if `mover` may move the piece on `from` to `to`.
#[must_use]
pub fn is_legal_move(board: &ChessBoard, from: Square, to: Square, mover: Color) -> bool {
    validate(board, from, to, mover).is_ok()
}

/// All legal moves for `mover`: every own piece against all 64 targets.
#[must_use]
pub fn legal_moves(board: &ChessBoard, mover: Color) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces() {
        if piece.color != mover {
            continue;
        }
        moves.extend(
            Square::all()
                .filter(|&to| is_legal_move(board, from, to, mover))
                .map(|to| ChessMove::new(from, to)),
        );
    }
    moves
}

/// `Win` for the side whose opponent has lost its king.
#[must_use]
pub fn outcome(board: &ChessBoard) -> Outcome<Color> {
    match (board.king_square(Color::White), board.king_square(Color::Black)) {
        (None, _) => Outcome::Win(Color::Black),
        (_, None) => Outcome::Win(Color::White),
        _ => Outcome::InProgress,
    }
}
