use super::action::Direction;

/// A cell coordinate on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent cell in a direction
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Manhattan distance to another cell
    pub fn manhattan_distance(&self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Display color tag for snakes and apples
///
/// Rendering-agnostic so the game module stays free of UI dependencies; the
/// renderer maps these to terminal colors. Apples dropped by a dying snake
/// carry that snake's tint to mark provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Magenta,
    LightBlue,
    LightRed,
    LightCyan,
    LightMagenta,
}

/// Tints assigned to rival snakes; red (apples) and green (player) excluded
pub const RIVAL_TINTS: &[Tint] = &[
    Tint::Yellow,
    Tint::Blue,
    Tint::Cyan,
    Tint::Magenta,
    Tint::LightBlue,
    Tint::LightRed,
    Tint::LightCyan,
    Tint::LightMagenta,
];

/// An apple on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub pos: Position,
    pub tint: Tint,
}

impl Apple {
    pub fn new(pos: Position, tint: Tint) -> Self {
        Self { pos, tint }
    }

    /// A plain red apple, the kind spawned at level start and after eating
    pub fn red(pos: Position) -> Self {
        Self::new(pos, Tint::Red)
    }
}

/// A snake: ordered body cells (head first), heading, and level progress
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, head at index 0
    pub body: Vec<Position>,
    /// Current heading
    pub direction: Direction,
    /// Apples eaten this level; zeroed on death and level transitions
    pub apples_eaten: u32,
    /// Display color
    pub tint: Tint,
}

impl Snake {
    /// Create a snake with trailing segments laid out opposite its heading
    pub fn new(head: Position, direction: Direction, length: usize, tint: Tint) -> Self {
        let mut body = vec![head];
        let (dx, dy) = direction.delta();

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy));
        }

        Self {
            body,
            direction,
            apples_eaten: 0,
            tint,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        *self.body.last().unwrap()
    }

    /// Check if position lies on any segment, head included
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head, popping the tail unless the snake grows this tick
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Soft death: collapse to a single segment at pos and zero level progress
    pub fn respawn_at(&mut self, pos: Position) {
        self.body = vec![pos];
        self.apples_eaten = 0;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state for one run
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player: Snake,
    pub rivals: Vec<Snake>,
    pub apples: Vec<Apple>,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Total score across levels (+10 per apple the player eats)
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    pub level_passed: bool,
    /// Meaningful once an outcome lands: true on a level win, false on a loss
    pub player_won: bool,
}

impl GameState {
    /// Create a new game state at level 1 with no rivals or apples yet
    pub fn new(player: Snake, grid_width: usize, grid_height: usize) -> Self {
        Self {
            player,
            rivals: Vec::new(),
            apples: Vec::new(),
            grid_width,
            grid_height,
            score: 0,
            level: 1,
            game_over: false,
            level_passed: false,
            player_won: false,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Number of snakes on the grid, player included
    pub fn snake_count(&self) -> usize {
        1 + self.rivals.len()
    }

    /// Snake by index: 0 is the player, 1.. are rivals
    pub fn snake(&self, idx: usize) -> &Snake {
        if idx == 0 {
            &self.player
        } else {
            &self.rivals[idx - 1]
        }
    }

    /// Mutable snake by index, same numbering as `snake`
    pub fn snake_mut(&mut self, idx: usize) -> &mut Snake {
        if idx == 0 {
            &mut self.player
        } else {
            &mut self.rivals[idx - 1]
        }
    }

    /// Iterate over all snakes, player first
    pub fn snakes(&self) -> impl Iterator<Item = &Snake> {
        std::iter::once(&self.player).chain(self.rivals.iter())
    }

    /// Check if any snake segment occupies the position
    pub fn cell_occupied(&self, pos: Position) -> bool {
        self.snakes().any(|s| s.contains(pos))
    }

    /// Check if any apple sits on the position
    pub fn apple_at(&self, pos: Position) -> bool {
        self.apples.iter().any(|a| a.pos == pos)
    }

    /// Free means no snake segment and no apple
    pub fn cell_free(&self, pos: Position) -> bool {
        !self.cell_occupied(pos) && !self.apple_at(pos)
    }

    /// Best per-level apple count among rivals, if any rivals remain
    pub fn best_rival_progress(&self) -> Option<u32> {
        self.rivals.iter().map(|r| r.apples_eaten).max()
    }

    /// True while the level is being played out
    pub fn is_running(&self) -> bool {
        !self.game_over && !self.level_passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.step(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.step(Direction::Down), Position::new(5, 6));
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(2, 3);
        let b = Position::new(5, 1);
        assert_eq!(a.manhattan_distance(b), 5);
        assert_eq!(b.manhattan_distance(a), 5);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3, Tint::Green);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
        assert_eq!(snake.apples_eaten, 0);
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3, Tint::Green);

        snake.advance_to(Position::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));

        // The first advance popped (3,5), so the tail is now (4,5).
        snake.advance_to(Position::new(7, 5), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(7, 5));
        assert_eq!(snake.tail(), Position::new(4, 5));
    }

    #[test]
    fn test_snake_respawn() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 4, Tint::Cyan);
        snake.apples_eaten = 7;

        snake.respawn_at(Position::new(1, 1));

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(1, 1));
        assert_eq!(snake.apples_eaten, 0);
        assert_eq!(snake.tint, Tint::Cyan);
    }

    #[test]
    fn test_new_state_has_no_outcome_yet() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 1, Tint::Green),
            20,
            20,
        );

        assert!(state.is_running());
        assert!(!state.game_over);
        assert!(!state.level_passed);
        assert!(!state.player_won);
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 1, Tint::Green),
            20,
            15,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 14)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 15)));
    }

    #[test]
    fn test_cell_free_accounts_for_snakes_and_apples() {
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3, Tint::Green),
            20,
            20,
        );
        state
            .rivals
            .push(Snake::new(Position::new(10, 10), Direction::Left, 2, Tint::Blue));
        state.apples.push(Apple::red(Position::new(1, 1)));

        assert!(!state.cell_free(Position::new(4, 5))); // player body
        assert!(!state.cell_free(Position::new(11, 10))); // rival body
        assert!(!state.cell_free(Position::new(1, 1))); // apple
        assert!(state.cell_free(Position::new(15, 15)));
    }

    #[test]
    fn test_snake_indexing() {
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 1, Tint::Green),
            20,
            20,
        );
        state
            .rivals
            .push(Snake::new(Position::new(10, 10), Direction::Left, 1, Tint::Blue));

        assert_eq!(state.snake_count(), 2);
        assert_eq!(state.snake(0).head(), Position::new(5, 5));
        assert_eq!(state.snake(1).head(), Position::new(10, 10));

        state.snake_mut(1).apples_eaten = 3;
        assert_eq!(state.best_rival_progress(), Some(3));
    }
}
