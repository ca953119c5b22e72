//! Tic-tac-toe engine.

use super::board::{Player, TicTacToeBoard};
use super::{rules, search};
use crate::core::{Difficulty, GameVariant, RandomSource};
use crate::error::MoveErrorKind;
use crate::rules::{GameEngine, Outcome};
use crate::search::SearchStats;

/// Tic-tac-toe rules plus the minimax opponent.
///
/// The human plays `First` (X), the engine plays `Second` (O).
#[derive(Clone, Debug)]
pub struct TicTacToe {
    difficulty: Difficulty,
    random_chance: f64,
    stats: SearchStats,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new(Difficulty::default(), 0.3)
    }
}

impl TicTacToe {
    /// Create an engine with the given strength and Easy-mode random chance.
    pub fn new(difficulty: Difficulty, random_chance: f64) -> Self {
        Self {
            difficulty,
            random_chance,
            stats: SearchStats::default(),
        }
    }

    /// Current opponent strength.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl GameEngine for TicTacToe {
    type Board = TicTacToeBoard;
    type Move = usize;
    type Side = Player;

    fn variant(&self) -> GameVariant {
        GameVariant::TicTacToe
    }

    fn initial_board(&self) -> TicTacToeBoard {
        TicTacToeBoard::new()
    }

    fn human_side(&self) -> Player {
        Player::First
    }

    fn engine_side(&self) -> Player {
        Player::Second
    }

    fn opponent(&self, side: Player) -> Player {
        side.opponent()
    }

    fn check_move(&self, board: &TicTacToeBoard, side: Player, cell: usize) -> Result<(), MoveErrorKind> {
        rules::validate(board, cell, side)
    }

    fn legal_moves(&self, board: &TicTacToeBoard, side: Player) -> Vec<usize> {
        if rules::outcome(board).is_terminal() || board.to_move() != side {
            return Vec::new();
        }
        board.empty_cells().into_vec()
    }

    fn apply(&self, board: &mut TicTacToeBoard, side: Player, cell: usize) {
        board.place(cell, side);
    }

    fn terminal(&self, board: &TicTacToeBoard) -> Outcome<Player> {
        rules::outcome(board)
    }

    fn best_move(
        &mut self,
        board: &TicTacToeBoard,
        side: Player,
        rng: &mut dyn RandomSource,
    ) -> Option<usize> {
        search::best_move(
            board,
            side,
            self.difficulty,
            self.random_chance,
            rng,
            &mut self.stats,
        )
    }

    fn last_stats(&self) -> &SearchStats {
        &self.stats
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}
