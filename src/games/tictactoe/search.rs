//! Exhaustive minimax for tic-tac-toe.
//!
//! The full game tree is under 550k positions, so there is no pruning and no
//! depth limit. `Second` is the maximizing side.

use std::time::Instant;

use tracing::{debug, instrument};

use super::board::{Player, TicTacToeBoard};
use super::rules::outcome;
use crate::core::{Difficulty, RandomSource};
use crate::rules::Outcome;
use crate::search::SearchStats;

/// Score of an immediate win. Each ply of delay costs one point.
pub const WIN_SCORE: i32 = 10;

/// Minimax value of `board` with `Second` maximizing.
///
/// `depth` is the number of plies already played below the search root.
/// Wins score `WIN_SCORE - depth` for `Second` and `depth - WIN_SCORE` for
/// `First`, so faster wins and slower losses are preferred. The board is
/// restored before returning.
pub fn minimax(board: &mut TicTacToeBoard, depth: i32, maximizing: bool) -> i32 {
    let mut stats = SearchStats::new();
    search(board, depth, maximizing, &mut stats)
}

fn search(board: &mut TicTacToeBoard, depth: i32, maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.visit(u16::try_from(depth).unwrap_or(u16::MAX));

    match outcome(board) {
        Outcome::Win(Player::Second) => {
            stats.leaves += 1;
            return WIN_SCORE - depth;
        }
        Outcome::Win(Player::First) => {
            stats.leaves += 1;
            return depth - WIN_SCORE;
        }
        Outcome::Draw => {
            stats.leaves += 1;
            return 0;
        }
        Outcome::InProgress => {}
    }

    let mover = if maximizing { Player::Second } else { Player::First };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for cell in board.empty_cells() {
        board.place(cell, mover);
        let score = search(board, depth + 1, !maximizing, stats);
        board.clear(cell);

        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    best
}

/// The minimax-optimal cell for `side` and its score.
///
/// `Second` takes the highest score, `First` the lowest. Ties go to the
/// lowest cell index. Returns `None` on a finished board.
pub fn optimal_move(
    board: &TicTacToeBoard,
    side: Player,
    stats: &mut SearchStats,
) -> Option<(usize, i32)> {
    if outcome(board).is_terminal() {
        return None;
    }

    let maximizing = side == Player::Second;
    let mut scratch = board.clone();
    let mut best: Option<(usize, i32)> = None;

    for cell in board.empty_cells() {
        scratch.place(cell, side);
        let score = search(&mut scratch, 0, !maximizing, stats);
        scratch.clear(cell);

        let better = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if better {
            best = Some((cell, score));
        }
    }

    best
}

/// Pick the reply for `side`.
///
/// In Easy mode a draw below `random_chance` replaces the optimal cell with a
/// uniformly random empty cell. Hard mode never consults `rng`.
#[instrument(skip(board, rng, stats))]
pub fn best_move(
    board: &TicTacToeBoard,
    side: Player,
    difficulty: Difficulty,
    random_chance: f64,
    rng: &mut dyn RandomSource,
    stats: &mut SearchStats,
) -> Option<usize> {
    stats.reset();
    let start = Instant::now();

    if outcome(board).is_terminal() {
        return None;
    }

    let choice = if difficulty == Difficulty::Easy && rng.next_unit() < random_chance {
        let empty = board.empty_cells();
        stats.random_pick = true;
        empty.get(rng.next_index(empty.len())).copied()
    } else {
        optimal_move(board, side, stats).map(|(cell, score)| {
            debug!(cell, score, "tic-tac-toe optimal reply");
            cell
        })
    };

    stats.time_us = start.elapsed().as_micros() as u64;
    debug!(?choice, nodes = stats.nodes, random = stats.random_pick, "tic-tac-toe search done");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    struct FixedRandom {
        unit: f64,
        index: usize,
    }

    impl RandomSource for FixedRandom {
        fn next_unit(&mut self) -> f64 {
            self.unit
        }

        fn next_index(&mut self, len: usize) -> usize {
            self.index % len
        }
    }

    #[test]
    fn test_empty_board_value_is_draw() {
        let mut board = TicTacToeBoard::new();
        assert_eq!(minimax(&mut board, 0, false), 0);
        assert_eq!(board, TicTacToeBoard::new());
    }

    #[test]
    fn test_terminal_scores() {
        let mut board = TicTacToeBoard::new();
        for i in [0, 1, 2] {
            board.place(i, Player::Second);
        }
        assert_eq!(minimax(&mut board, 3, true), WIN_SCORE - 3);

        let mut board = TicTacToeBoard::new();
        for i in [0, 4, 8] {
            board.place(i, Player::First);
        }
        assert_eq!(minimax(&mut board, 2, true), 2 - WIN_SCORE);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O .
        // X X .
        // X . .
        let mut board = TicTacToeBoard::new();
        board.place(0, Player::Second);
        board.place(1, Player::Second);
        board.place(3, Player::First);
        board.place(4, Player::First);
        board.place(6, Player::First);

        let mut stats = SearchStats::new();
        let (cell, score) = optimal_move(&board, Player::Second, &mut stats).unwrap();
        assert_eq!(cell, 2);
        assert_eq!(score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_threat() {
        // X X .
        // . O .
        // . . .
        let mut board = TicTacToeBoard::new();
        board.place(0, Player::First);
        board.place(1, Player::First);
        board.place(4, Player::Second);

        let mut rng = GameRng::new(1);
        let mut stats = SearchStats::new();
        let cell = best_move(&board, Player::Second, Difficulty::Hard, 0.3, &mut rng, &mut stats);
        assert_eq!(cell, Some(2));
        assert!(!stats.random_pick);
        assert!(stats.nodes > 0);
    }

    #[test]
    fn test_corner_opening_answered_in_center() {
        let mut board = TicTacToeBoard::new();
        board.place(0, Player::First);

        let mut rng = GameRng::new(1);
        let mut stats = SearchStats::new();
        let cell = best_move(&board, Player::Second, Difficulty::Hard, 0.3, &mut rng, &mut stats);
        assert_eq!(cell, Some(4));
    }

    #[test]
    fn test_first_side_minimizes() {
        // O O .
        // . X .
        // X . .
        // Cell 2 both blocks and completes the anti-diagonal.
        let mut board = TicTacToeBoard::new();
        board.place(4, Player::First);
        board.place(0, Player::Second);
        board.place(6, Player::First);
        board.place(1, Player::Second);

        let mut stats = SearchStats::new();
        let (cell, _) = optimal_move(&board, Player::First, &mut stats).unwrap();
        assert_eq!(cell, 2);
    }

    #[test]
    fn test_easy_override_uses_random_cell() {
        let mut board = TicTacToeBoard::new();
        board.place(0, Player::First);

        let mut rng = FixedRandom { unit: 0.1, index: 2 };
        let mut stats = SearchStats::new();
        let cell = best_move(&board, Player::Second, Difficulty::Easy, 0.3, &mut rng, &mut stats);
        // Empty cells are 1..=8; index 2 is cell 3.
        assert_eq!(cell, Some(3));
        assert!(stats.random_pick);
        assert_eq!(stats.nodes, 0);
    }

    #[test]
    fn test_easy_without_override_is_optimal() {
        let mut board = TicTacToeBoard::new();
        board.place(0, Player::First);

        let mut rng = FixedRandom { unit: 0.3, index: 2 };
        let mut stats = SearchStats::new();
        let cell = best_move(&board, Player::Second, Difficulty::Easy, 0.3, &mut rng, &mut stats);
        assert_eq!(cell, Some(4));
        assert!(!stats.random_pick);
    }

    #[test]
    fn test_no_move_on_finished_board() {
        let mut board = TicTacToeBoard::new();
        for i in [0, 1, 2] {
            board.place(i, Player::First);
        }
        let mut rng = GameRng::new(1);
        let mut stats = SearchStats::new();
        assert_eq!(
            best_move(&board, Player::Second, Difficulty::Hard, 0.3, &mut rng, &mut stats),
            None
        );
    }
}
