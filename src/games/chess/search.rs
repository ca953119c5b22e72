//! Alpha-beta minimax for the chess variant.
//!
//! Black is the maximizing side. Scores are material only, with no move
//! ordering or transposition table.

use std::time::Instant;

use tracing::{debug, instrument};

use super::board::{ChessBoard, ChessMove, Color};
use super::rules::{legal_moves, outcome};
use crate::search::SearchStats;

/// Score for a side that has no legal move, from the maximizer's view.
pub const NO_MOVES_SCORE: i32 = 1000;

/// Default search depth in plies, root move included.
pub const DEFAULT_DEPTH: u32 = 3;

/// Black material minus White material.
#[must_use]
pub fn evaluate(board: &ChessBoard) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| match piece.color {
            Color::Black => piece.kind.value(),
            Color::White => -piece.kind.value(),
        })
        .sum()
}

/// Alpha-beta minimax value of `board`.
///
/// `maximizing` means Black is to move. Returns the static evaluation at
/// depth 0 or once a king has been captured, and `-NO_MOVES_SCORE` /
/// `NO_MOVES_SCORE` when the side to move (Black / White) has no move.
pub fn minimax(board: &ChessBoard, depth: u32, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    let mut stats = SearchStats::new();
    search(board, depth, 0, maximizing, alpha, beta, &mut stats)
}

fn search(
    board: &ChessBoard,
    depth: u32,
    ply: u16,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.visit(ply);

    if depth == 0 || outcome(board).is_terminal() {
        stats.leaves += 1;
        return evaluate(board);
    }

    let mover = if maximizing { Color::Black } else { Color::White };
    let moves = legal_moves(board, mover);
    if moves.is_empty() {
        stats.leaves += 1;
        return if maximizing { -NO_MOVES_SCORE } else { NO_MOVES_SCORE };
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let mut child = board.clone();
        child.move_piece(mv);
        let score = search(&child, depth - 1, ply + 1, !maximizing, alpha, beta, stats);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

/// Best move for `side` searching `depth` plies, with its score.
///
/// Black takes the highest score, White the lowest; the first move in scan
/// order wins ties. Returns `None` when `side` has no legal move or the game
/// is already decided.
#[instrument(skip(board, stats))]
pub fn best_move(
    board: &ChessBoard,
    side: Color,
    depth: u32,
    stats: &mut SearchStats,
) -> Option<(ChessMove, i32)> {
    stats.reset();
    let start = Instant::now();

    if outcome(board).is_terminal() {
        stats.time_us = start.elapsed().as_micros() as u64;
        return None;
    }

    let maximizing = side == Color::Black;
    let remaining = depth.max(1) - 1;
    let mut best: Option<(ChessMove, i32)> = None;

    for mv in legal_moves(board, side) {
        let mut child = board.clone();
        child.move_piece(mv);
        let score = search(&child, remaining, 1, !maximizing, i32::MIN, i32::MAX, stats);

        let better = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if better {
            best = Some((mv, score));
        }
    }

    stats.time_us = start.elapsed().as_micros() as u64;
    debug!(
        choice = ?best.map(|(mv, _)| mv.to_string()),
        score = ?best.map(|(_, s)| s),
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "chess search done"
    );
    best
}
