//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `best_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited (every minimax call).
    pub nodes: u64,

    /// Positions scored without expanding further (terminal or depth cutoff).
    pub leaves: u64,

    /// Alpha-beta cutoffs taken. Always zero for the exhaustive search.
    pub cutoffs: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,

    /// Whether the move came from the random override instead of the search.
    pub random_pick: bool,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a visit at `depth` plies below the root.
    pub(crate) fn visit(&mut self, depth: u16) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
