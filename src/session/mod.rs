//! Session controller: turn order, engine replies, and the read-only view.
//!
//! - `GameSession<G>`: one game, generic over `GameEngine`
//! - `Session`: the active game plus RNG and score tally, as used by the UI
//! - `BoardView`: snapshot for rendering

mod controller;
mod manager;
mod scoreboard;
mod view;

pub use controller::GameSession;
pub use manager::Session;
pub use scoreboard::Scoreboard;
pub use view::{BoardSnapshot, BoardView, SessionMove};
