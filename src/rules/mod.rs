//! Game engine trait for game implementations.
//!
//! Games implement `GameEngine` to define:
//! - Legal moves for each board
//! - How moves modify the board
//! - Win/draw conditions and the opponent's search
//!
//! The session controller calls into `GameEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{GameEngine, Outcome, Seat};
