use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::state::Position;

/// What death means for a snake in this game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum DeathPolicy {
    /// Soft death: reset to length one at a safe cell, leaving an apple behind
    #[default]
    Respawn,
    /// Hard death: rivals are removed for good, player death ends the game
    Eliminate,
}

/// Fixed configuration for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Apples a snake must eat to win a level
    pub apples_per_level: u32,
    /// Tick rate at level 1; each level runs 10% faster than the last
    pub base_tick_hz: f64,
    /// How deaths are resolved
    pub death_policy: DeathPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            apples_per_level: 10,
            base_tick_hz: 5.0,
            death_policy: DeathPolicy::Respawn,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Canonical player start cell, also the preferred respawn target
    pub fn player_start(&self) -> Position {
        Position::new(self.grid_width as i32 / 3, self.grid_height as i32 / 2)
    }
}

/// Quantities derived from the level number, recomputed once per level
/// transition and passed into the decision and resolution code.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub level: u32,
    /// Apples on the grid: 4 per level
    pub apple_count: usize,
    /// Rival snakes: 2 per level
    pub rival_count: usize,
    /// Margin from the grid edges the rival heuristic treats as unsafe
    pub danger_zone: i32,
    /// Chance per tick that a rival chases the nearest apple, capped at 2/3
    pub pursuit_chance: f64,
    /// Whether rivals chase apples even through the danger zone
    pub pursue_unsafe: bool,
    /// Chance a rival prefers a safe heading when one exists
    pub safe_bias: f64,
    /// Time between ticks at this level
    pub tick_interval: Duration,
}

impl LevelConfig {
    pub fn for_level(config: &GameConfig, level: u32) -> Self {
        let steps = (level - 1) as f64;
        let rate = config.base_tick_hz * 1.1f64.powi(level as i32 - 1);

        Self {
            level,
            apple_count: level as usize * 4,
            rival_count: level as usize * 2,
            danger_zone: (3 - (level as i32 - 1) / 3).max(1),
            pursuit_chance: (0.10 + steps * 0.063).min(2.0 / 3.0),
            pursue_unsafe: level >= 5,
            safe_bias: if level < 8 { 1.0 } else { 0.7 },
            tick_interval: Duration::from_secs_f64(1.0 / rate),
        }
    }
}
