use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::action::{Action, Direction};
use super::config::{DeathPolicy, GameConfig, LevelConfig};
use super::rival;
use super::state::{Apple, GameState, Position, Snake, Tint, RIVAL_TINTS};

/// Probes for a free cell before an apple spawn accepts a conflict
const APPLE_SPAWN_ATTEMPTS: usize = 1000;
/// Probes for a free cell before a respawn falls back to the preferred cell
const RESPAWN_ATTEMPTS: usize = 100;

/// Why a snake died during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Intended head left the grid
    Wall,
    /// Intended head landed on the snake's own body
    SelfCollision,
    /// Intended head landed on another snake's pre-tick body
    Body,
    /// Two intended heads claimed the same cell
    HeadOn,
}

/// What happened during one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// Whether the player ate an apple this tick
    pub player_ate: bool,
    /// How the player died, if it did
    pub player_death: Option<DeathCause>,
    /// Rivals that died this tick
    pub rival_deaths: u32,
    /// Player reached the apple quota
    pub level_passed: bool,
    /// The run ended (player eliminated, or a rival reached the quota)
    pub game_over: bool,
}

/// The game engine: owns the run configuration and the random source, and
/// applies all state mutation. Seedable for reproducible runs.
pub struct GameEngine {
    config: GameConfig,
    level: LevelConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create an engine with an entropy-seeded random source
    pub fn new(config: GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed for deterministic replay
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, rng: StdRng) -> Self {
        let level = LevelConfig::for_level(&config, 1);
        Self { config, level, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level_config(&self) -> &LevelConfig {
        &self.level
    }

    /// Start a fresh run at level 1
    pub fn reset(&mut self) -> GameState {
        self.level = LevelConfig::for_level(&self.config, 1);

        let player = Snake::new(self.config.player_start(), Direction::Right, 1, Tint::Green);
        let mut state = GameState::new(player, self.config.grid_width, self.config.grid_height);
        self.populate_level(&mut state);
        state
    }

    /// Advance to the next level: player keeps its position and score but
    /// shrinks back to length one, and the board is repopulated.
    pub fn advance_level(&mut self, state: &mut GameState) {
        state.level += 1;
        self.level = LevelConfig::for_level(&self.config, state.level);
        state.level_passed = false;

        let head = state.player.head();
        state.player.respawn_at(head);
        self.populate_level(state);

        debug!(level = state.level, "level started");
    }

    /// Spawn the level's apples and rivals from the current level config
    fn populate_level(&mut self, state: &mut GameState) {
        state.rivals.clear();
        state.apples.clear();

        for _ in 0..self.level.apple_count {
            let apple = self.spawn_apple(state, Tint::Red);
            state.apples.push(apple);
        }

        let count = self.level.rival_count;
        for i in 0..count {
            let start = self.rival_start(i, count);
            let tint = *RIVAL_TINTS.choose(&mut self.rng).unwrap_or(&Tint::Blue);
            state
                .rivals
                .push(Snake::new(start, Direction::Left, 1, tint));
        }
    }

    /// Execute one tick: pick every heading, then resolve all moves at once
    pub fn tick(&mut self, state: &mut GameState, action: Action) -> TickResult {
        if !state.is_running() {
            return TickResult {
                player_ate: false,
                player_death: None,
                rival_deaths: 0,
                level_passed: state.level_passed,
                game_over: state.game_over,
            };
        }

        if let Action::Move(dir) = action {
            if !state.player.direction.is_opposite(dir) {
                state.player.direction = dir;
            }
        }

        for i in 0..state.rivals.len() {
            let head = state.rivals[i].head();
            let heading = state.rivals[i].direction;
            let decision = rival::decide_heading(
                head,
                heading,
                state.grid_width,
                state.grid_height,
                &state.apples,
                &self.level,
                &mut self.rng,
            );
            state.rivals[i].direction = decision;
        }

        self.resolve(state)
    }

    /// Advance every snake one cell along its current heading and resolve all
    /// interactions against the pre-tick state.
    ///
    /// Ordering: walls, self collision (ignoring the tail cell vacated this
    /// tick), body collision (strictly longer survives, attacker loses ties),
    /// head-to-head (strictly longer survives, equal length kills both), then
    /// eating, win checks, and death handling per the configured policy.
    pub fn resolve(&mut self, state: &mut GameState) -> TickResult {
        let n = state.snake_count();

        let intents: Vec<Position> = (0..n)
            .map(|i| {
                let s = state.snake(i);
                s.head().step(s.direction)
            })
            .collect();
        let lengths: Vec<usize> = (0..n).map(|i| state.snake(i).len()).collect();
        let eats: Vec<bool> = intents.iter().map(|p| state.apple_at(*p)).collect();

        let mut deaths: Vec<Option<DeathCause>> = vec![None; n];

        // Walls.
        for i in 0..n {
            if !state.is_in_bounds(intents[i]) {
                deaths[i] = Some(DeathCause::Wall);
            }
        }

        // Self collision. The tail cell is vacated this tick unless the snake
        // grows, so it is not lethal.
        for i in 0..n {
            if deaths[i].is_some() {
                continue;
            }
            let body = &state.snake(i).body;
            let limit = if !eats[i] && body.len() > 1 {
                body.len() - 1
            } else {
                body.len()
            };
            if body[..limit].contains(&intents[i]) {
                deaths[i] = Some(DeathCause::SelfCollision);
            }
        }

        // Head into another snake's pre-tick body.
        for i in 0..n {
            if deaths[i].is_some() {
                continue;
            }
            for j in 0..n {
                if i == j {
                    continue;
                }
                if state.snake(j).contains(intents[i]) {
                    if lengths[i] > lengths[j] {
                        deaths[j].get_or_insert(DeathCause::Body);
                    } else {
                        deaths[i] = Some(DeathCause::Body);
                    }
                    break;
                }
            }
        }

        // Head-to-head claims on the same cell.
        for i in 0..n {
            for j in (i + 1)..n {
                if intents[i] != intents[j] {
                    continue;
                }
                if lengths[i] > lengths[j] {
                    deaths[j].get_or_insert(DeathCause::HeadOn);
                } else if lengths[j] > lengths[i] {
                    deaths[i].get_or_insert(DeathCause::HeadOn);
                } else {
                    deaths[i].get_or_insert(DeathCause::HeadOn);
                    deaths[j].get_or_insert(DeathCause::HeadOn);
                }
            }
        }

        let mut result = TickResult {
            player_ate: false,
            player_death: deaths[0],
            rival_deaths: 0,
            level_passed: false,
            game_over: false,
        };

        // Survivors move; eating grows the snake and replaces the apple.
        for i in 0..n {
            if deaths[i].is_some() {
                continue;
            }
            state.snake_mut(i).advance_to(intents[i], eats[i]);
            if eats[i] {
                state.snake_mut(i).apples_eaten += 1;
                if i == 0 {
                    state.score += 10;
                    result.player_ate = true;
                }
                if let Some(slot) = state.apples.iter().position(|a| a.pos == intents[i]) {
                    let fresh = self.spawn_apple(state, Tint::Red);
                    state.apples[slot] = fresh;
                }
            }
        }

        // Win checks before deaths are applied: a rival reaching the quota
        // ends the run immediately.
        let quota = self.config.apples_per_level;
        if deaths[0].is_none() && state.player.apples_eaten >= quota {
            state.level_passed = true;
            state.player_won = true;
        }
        if state.rivals.iter().any(|r| r.apples_eaten >= quota) {
            state.game_over = true;
            state.player_won = false;
        }

        // Death handling. Reverse order keeps rival indices stable while
        // eliminating.
        for i in (0..n).rev() {
            let Some(cause) = deaths[i] else { continue };
            if i > 0 {
                result.rival_deaths += 1;
            }

            let death_cell = state.snake(i).head();
            let tint = state.snake(i).tint;

            match self.config.death_policy {
                DeathPolicy::Respawn => {
                    state.apples.push(Apple::new(death_cell, tint));
                    let preferred = if i == 0 {
                        self.config.player_start()
                    } else {
                        self.rival_start(i - 1, state.rivals.len())
                    };
                    let cell = self.safe_respawn_position(state, preferred);
                    state.snake_mut(i).respawn_at(cell);
                    debug!(snake = i, ?cause, "snake respawned");
                }
                DeathPolicy::Eliminate => {
                    if i == 0 {
                        state.game_over = true;
                        state.player_won = false;
                    } else {
                        state.rivals.remove(i - 1);
                    }
                    debug!(snake = i, ?cause, "snake eliminated");
                }
            }
        }

        result.level_passed = state.level_passed;
        result.game_over = state.game_over;
        result
    }

    /// Staggered rival start cell, spread across the grid
    fn rival_start(&self, index: usize, count: usize) -> Position {
        let w = self.config.grid_width as i32;
        let h = self.config.grid_height as i32;
        let i = index as i32;

        let x = (w / 2 + (i + 1) * (w / (count as i32 + 2))).rem_euclid(w);
        let y = (h / 2 + (i % 3 - 1) * 5).rem_euclid(h);
        Position::new(x, y)
    }

    fn random_cell(&mut self) -> Position {
        Position::new(
            self.rng.gen_range(0..self.config.grid_width) as i32,
            self.rng.gen_range(0..self.config.grid_height) as i32,
        )
    }

    /// Pick a free cell for a new apple. Bounded retry: after the probe
    /// budget the last candidate is accepted even if occupied.
    fn spawn_apple(&mut self, state: &GameState, tint: Tint) -> Apple {
        let mut pos = self.random_cell();
        for _ in 0..APPLE_SPAWN_ATTEMPTS {
            if state.cell_free(pos) {
                return Apple::new(pos, tint);
            }
            pos = self.random_cell();
        }
        Apple::new(pos, tint)
    }

    /// Pick a respawn cell: the preferred cell if free, then a bounded random
    /// search, then the preferred cell regardless.
    fn safe_respawn_position(&mut self, state: &GameState, preferred: Position) -> Position {
        if state.cell_free(preferred) {
            return preferred;
        }
        for _ in 0..RESPAWN_ATTEMPTS {
            let pos = self.random_cell();
            if state.cell_free(pos) {
                return pos;
            }
        }
        preferred
    }
}
