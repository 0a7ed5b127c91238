//! Core game logic
//!
//! Everything here is free of I/O and rendering dependencies: the grid state,
//! the rival decision heuristic, and the tick resolution pass. Randomness
//! comes from a seedable source owned by the engine, so whole runs replay
//! deterministically.

pub mod action;
pub mod config;
pub mod engine;
pub mod rival;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{DeathPolicy, GameConfig, LevelConfig};
pub use engine::{DeathCause, GameEngine, TickResult};
pub use state::{Apple, GameState, Position, Snake, Tint};
