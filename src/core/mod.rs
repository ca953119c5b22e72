//! Core engine types: RNG and configuration.
//!
//! These are shared by both games. Game-specific types live under `games`.

pub mod config;
pub mod rng;

pub use config::{Difficulty, EngineConfig, GameVariant};
pub use rng::{GameRng, GameRngState, RandomSource};
