//! Simplified chess against an alpha-beta opponent.
//!
//! Standard piece movement without check, castling, en passant or
//! promotion. Taking the enemy king wins on the spot.

mod board;
mod game;
pub mod rules;
pub mod search;

pub use board::{ChessBoard, ChessMove, Color, Piece, PieceKind, Square, BOARD_SIZE};
pub use game::Chess;
