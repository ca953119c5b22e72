//! # duel-engine
//!
//! Opponent engine for two small board games played against a human:
//! tic-tac-toe and a simplified chess variant.
//!
//! ## Design Principles
//!
//! 1. **Closed games**: Each game owns its board, rules and search. They
//!    share no board types.
//!
//! 2. **One controller**: Both games implement `GameEngine`, and the
//!    session controller is written once against that trait.
//!
//! 3. **Owned state**: A `Session` value owns the live board and the random
//!    source. Searches work on clones and never keep them.
//!
//! ## Searches
//!
//! - **Tic-tac-toe**: exhaustive minimax over the full tree. Easy mode swaps
//!   in a random cell 30% of the time.
//!
//! - **Chess**: material-only alpha-beta minimax, 3 plies by default. The
//!   game ends when a king is captured; there is no check detection.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration
//! - `rules`: `GameEngine` trait and outcomes
//! - `search`: search statistics
//! - `games`: tic-tac-toe and chess
//! - `session`: turn order, engine replies, board view, score tally
//! - `error`: move rejection reasons

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Difficulty, EngineConfig, GameRng, GameRngState, GameVariant, RandomSource};

pub use crate::error::{MoveError, MoveErrorKind};

pub use crate::rules::{GameEngine, Outcome, Seat};

pub use crate::search::SearchStats;

pub use crate::games::chess::{Chess, ChessBoard, ChessMove, Color, Piece, PieceKind, Square};
pub use crate::games::tictactoe::{Cell, Player, TicTacToe, TicTacToeBoard};

pub use crate::session::{BoardSnapshot, BoardView, GameSession, Scoreboard, Session, SessionMove};
