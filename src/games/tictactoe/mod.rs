//! Tic-tac-toe against an exhaustive minimax opponent.
//!
//! - Board: nine cells, row-major
//! - Rules: alternate marks, three in a row wins, full board draws
//! - Opponent: full-tree minimax; Easy mode plays a random cell 30% of the time

mod board;
mod game;
pub mod rules;
pub mod search;

pub use board::{Cell, CellList, Player, TicTacToeBoard, CELL_COUNT};
pub use game::TicTacToe;
