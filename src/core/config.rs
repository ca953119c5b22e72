//! Engine configuration: which game, how hard, and how the opponent is seeded.

use serde::{Deserialize, Serialize};

/// Which game a session plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    /// 3x3 tic-tac-toe.
    #[default]
    TicTacToe,
    /// Simplified chess that ends on king capture.
    Chess,
}

/// Opponent strength for tic-tac-toe.
///
/// Chess ignores this setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Plays a random cell some of the time.
    #[default]
    Easy,
    /// Always plays the minimax-optimal cell.
    Hard,
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Game played after construction and after `reset`.
    pub variant: GameVariant,

    /// Tic-tac-toe opponent strength.
    pub difficulty: Difficulty,

    /// Probability that Easy mode replaces the optimal reply with a random cell.
    pub easy_random_chance: f64,

    /// Total plies searched by the chess opponent (root move included).
    pub chess_depth: u32,

    /// Random seed for the session RNG.
    /// Same seed produces the same Easy-mode replies.
    pub seed: u64,

    /// How long the presentation layer should wait before showing the
    /// opponent's reply (milliseconds). The engine itself never sleeps.
    pub think_delay_ms: u64,

    /// Whether an accepted human move immediately triggers the engine reply.
    /// When false, the caller drives the reply with `engine_move`.
    pub auto_reply: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            variant: GameVariant::TicTacToe,
            difficulty: Difficulty::Easy,
            easy_random_chance: 0.3,
            chess_depth: 3,
            seed: 42,
            think_delay_ms: 500,
            auto_reply: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a different game variant.
    pub fn with_variant(mut self, variant: GameVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Create a new config with a different difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom chess search depth.
    ///
    /// Depths below 1 are raised to 1 so the engine always looks at its own moves.
    pub fn with_chess_depth(mut self, depth: u32) -> Self {
        self.chess_depth = depth.max(1);
        self
    }

    /// Create a new config with a custom Easy-mode random chance, clamped to `[0, 1]`.
    pub fn with_easy_random_chance(mut self, chance: f64) -> Self {
        self.easy_random_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Create a new config with a custom presentation delay.
    pub fn with_think_delay_ms(mut self, delay: u64) -> Self {
        self.think_delay_ms = delay;
        self
    }

    /// Create a new config that leaves the engine reply to the caller.
    pub fn with_auto_reply(mut self, auto_reply: bool) -> Self {
        self.auto_reply = auto_reply;
        self
    }

    /// The presentation delay as a `Duration`.
    #[must_use]
    pub fn think_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.think_delay_ms)
    }
}
