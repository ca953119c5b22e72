//! Game implementations.
//!
//! - `tictactoe`: 3x3 board, exhaustive minimax opponent
//! - `chess`: king-capture chess, depth-limited alpha-beta opponent

pub mod chess;
pub mod tictactoe;
