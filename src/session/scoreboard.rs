//! Running tally of finished games.

use serde::{Deserialize, Serialize};

use crate::rules::{Outcome, Seat};

/// Wins, losses and draws across games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by the human.
    pub human_wins: u32,
    /// Games won by the engine.
    pub engine_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Scoreboard {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game. `InProgress` is ignored.
    pub fn record(&mut self, outcome: Outcome<Seat>) {
        match outcome {
            Outcome::Win(Seat::Human) => self.human_wins += 1,
            Outcome::Win(Seat::Engine) => self.engine_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Total finished games.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.human_wins + self.engine_wins + self.draws
    }

    /// Clear the tally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
