//! Chess variant engine.

use super::board::{ChessBoard, ChessMove, Color};
use super::search::DEFAULT_DEPTH;
use super::{rules, search};
use crate::core::{GameVariant, RandomSource};
use crate::error::MoveErrorKind;
use crate::rules::{GameEngine, Outcome};
use crate::search::SearchStats;

/// Chess variant rules plus the alpha-beta opponent.
///
/// The human plays White, the engine plays Black.
#[derive(Clone, Debug)]
pub struct Chess {
    depth: u32,
    stats: SearchStats,
}

impl Default for Chess {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Chess {
    /// Create an engine searching `depth` plies.
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
            stats: SearchStats::default(),
        }
    }

    /// Search depth in plies.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl GameEngine for Chess {
    type Board = ChessBoard;
    type Move = ChessMove;
    type Side = Color;

    fn variant(&self) -> GameVariant {
        GameVariant::Chess
    }

    fn initial_board(&self) -> ChessBoard {
        ChessBoard::new()
    }

    fn human_side(&self) -> Color {
        Color::White
    }

    fn engine_side(&self) -> Color {
        Color::Black
    }

    fn opponent(&self, side: Color) -> Color {
        side.opponent()
    }

    fn check_move(&self, board: &ChessBoard, side: Color, mv: ChessMove) -> Result<(), MoveErrorKind> {
        if rules::outcome(board).is_terminal() {
            return Err(MoveErrorKind::GameOver);
        }
        rules::validate(board, mv.from, mv.to, side)
    }

    fn legal_moves(&self, board: &ChessBoard, side: Color) -> Vec<ChessMove> {
        if rules::outcome(board).is_terminal() {
            return Vec::new();
        }
        rules::legal_moves(board, side)
    }

    fn apply(&self, board: &mut ChessBoard, _side: Color, mv: ChessMove) {
        board.move_piece(mv);
    }

    fn terminal(&self, board: &ChessBoard) -> Outcome<Color> {
        rules::outcome(board)
    }

    fn best_move(
        &mut self,
        board: &ChessBoard,
        side: Color,
        _rng: &mut dyn RandomSource,
    ) -> Option<ChessMove> {
        search::best_move(board, side, self.depth, &mut self.stats).map(|(mv, _)| mv)
    }

    fn last_stats(&self) -> &SearchStats {
        &self.stats
    }
}
