//! Game engine trait shared by both games.
//!
//! Each game implements `GameEngine` to define:
//! - What moves are legal
//! - How moves modify the board
//! - Win/draw conditions
//! - How the opponent picks its reply

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameVariant, RandomSource};
use crate::error::MoveErrorKind;
use crate::search::SearchStats;

/// Result of a game, generic over the game's notion of a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<S> {
    /// Game continues.
    InProgress,
    /// Single winner.
    Win(S),
    /// No winner (tic-tac-toe only).
    Draw,
}

impl<S> Default for Outcome<S> {
    fn default() -> Self {
        Outcome::InProgress
    }
}

impl<S: Copy + PartialEq> Outcome<S> {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<S> {
        match self {
            Outcome::Win(side) => Some(*side),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: S) -> bool {
        self.winner() == Some(side)
    }

    /// Translate the winning side into another side type.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Outcome<T> {
        match self {
            Outcome::InProgress => Outcome::InProgress,
            Outcome::Win(side) => Outcome::Win(f(side)),
            Outcome::Draw => Outcome::Draw,
        }
    }
}

/// Who sits on a side of the board, independent of the game being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The person clicking cells.
    Human,
    /// The search-driven opponent.
    Engine,
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "Human"),
            Seat::Engine => write!(f, "Engine"),
        }
    }
}

/// Game engine trait.
///
/// The session controller is written once against this trait.
///
/// ## Implementation Notes
///
/// - `check_move`: Must not look at whose turn it is; the session does that
/// - `apply`: Only called with moves that passed `check_move`
/// - `terminal`: Must be derivable from the board alone
/// - `best_move`: Returns `None` only when the side has no legal moves
pub trait GameEngine {
    /// Board representation.
    type Board: Clone + std::fmt::Debug;
    /// A single half-move.
    type Move: Copy + std::fmt::Debug + PartialEq;
    /// A side of the board (mark or color).
    type Side: Copy + std::fmt::Debug + PartialEq;

    /// Which variant this engine plays.
    fn variant(&self) -> GameVariant;

    /// Fresh board at game start.
    fn initial_board(&self) -> Self::Board;

    /// Side played by the human. Moves first.
    fn human_side(&self) -> Self::Side;

    /// Side played by the search.
    fn engine_side(&self) -> Self::Side;

    /// The other side.
    fn opponent(&self, side: Self::Side) -> Self::Side;

    /// Validate a move by `side`, reporting why it is rejected.
    fn check_move(
        &self,
        board: &Self::Board,
        side: Self::Side,
        mv: Self::Move,
    ) -> Result<(), MoveErrorKind>;

    /// All legal moves for `side`, in scan order.
    fn legal_moves(&self, board: &Self::Board, side: Self::Side) -> Vec<Self::Move>;

    /// Apply a legal move to the board.
    fn apply(&self, board: &mut Self::Board, side: Self::Side, mv: Self::Move);

    /// Current outcome of the board.
    fn terminal(&self, board: &Self::Board) -> Outcome<Self::Side>;

    /// Pick a move for `side`.
    fn best_move(
        &mut self,
        board: &Self::Board,
        side: Self::Side,
        rng: &mut dyn RandomSource,
    ) -> Option<Self::Move>;

    /// Statistics from the most recent `best_move`.
    fn last_stats(&self) -> &SearchStats;

    // === Convenience Methods ===

    /// Check if a move is legal for `side`.
    fn is_legal(&self, board: &Self::Board, side: Self::Side, mv: Self::Move) -> bool {
        self.check_move(board, side, mv).is_ok()
    }

    /// Map a side onto the seat playing it.
    fn seat_of(&self, side: Self::Side) -> Seat {
        if side == self.human_side() {
            Seat::Human
        } else {
            Seat::Engine
        }
    }

    /// Change opponent strength. Games without difficulty levels ignore this.
    fn set_difficulty(&mut self, _difficulty: Difficulty) {}
}
