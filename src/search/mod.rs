//! Shared search diagnostics.
//!
//! The searches themselves live with their games: exhaustive minimax in
//! `games::tictactoe::search`, alpha-beta in `games::chess::search`.

pub mod stats;

pub use stats::SearchStats;
