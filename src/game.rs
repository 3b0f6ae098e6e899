use rand::Rng;

use crate::config::Config;
use crate::food;
use crate::snake::{
    Direction, Position, Snake, has_eaten_food, is_self_collision, is_wall_collision, move_head,
};

/// Outcome of the current game.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum GameResult {
    #[default]
    InProgress,
    Win,
    Lose,
}

impl GameResult {
    /// Win and lose are terminal; the engine will not advance past them.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a game was lost.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoseCause {
    WallCollision,
    SelfCollision,
}

/// Score, result, and the direction the player has most recently chosen.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct GameStatus {
    pub score: u32,
    pub result: GameResult,
    pub direction: Direction,
}

impl GameStatus {
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            score: 0,
            result: GameResult::InProgress,
            direction,
        }
    }

    fn lost(self) -> Self {
        Self {
            result: GameResult::Lose,
            ..self
        }
    }
}

/// Everything one tick reads. The caller owns exactly one snapshot and
/// replaces it with [`Snapshot::apply`] after every tick.
///
/// The direction the next tick moves in is `game.direction`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Snapshot {
    pub snake: Snake,
    pub food: Position,
    pub game: GameStatus,
}

impl Snapshot {
    /// Fresh game: one segment at the configured start, heading right, with
    /// food placed from `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        Self {
            snake: Snake::new(config.snake_start_position),
            food: food::place(rng, config),
            game: GameStatus::new(Direction::RIGHT),
        }
    }

    /// Stores a validated direction for the next tick.
    pub fn set_direction(&mut self, direction: Direction) {
        self.game.direction = direction;
    }

    /// Commits a tick result. Absent fields keep their previous value.
    #[must_use]
    pub fn apply(self, update: TickUpdate) -> Self {
        Self {
            snake: update.snake.unwrap_or(self.snake),
            food: update.food.unwrap_or(self.food),
            game: update.game.unwrap_or(self.game),
        }
    }
}

/// Partial replacement produced by [`tick`]; `None` means unchanged.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TickUpdate {
    pub snake: Option<Snake>,
    pub food: Option<Position>,
    pub game: Option<GameStatus>,
    /// Set on the tick that ends the game with a loss.
    pub lose_cause: Option<LoseCause>,
}

impl TickUpdate {
    /// True when the tick changed nothing (finished game or empty snake).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snake.is_none() && self.food.is_none() && self.game.is_none()
    }
}

/// Score and food after comparing the new head with the food.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodOutcome {
    pub game: GameStatus,
    /// Replacement food, present only when food was eaten and the game goes on.
    pub food: Option<Position>,
}

/// Scores the food if `new_head` is on it. Reaching `score_win` wins the game
/// and suppresses the replacement food.
pub fn handle_food_consumption<R: Rng + ?Sized>(
    new_head: Position,
    food: Position,
    game: GameStatus,
    config: &Config,
    rng: &mut R,
) -> FoodOutcome {
    if !has_eaten_food(new_head, food) {
        return FoodOutcome { game, food: None };
    }

    let score = game.score.saturating_add(config.score_per_food);
    if score >= config.score_win {
        return FoodOutcome {
            game: GameStatus {
                score,
                result: GameResult::Win,
                ..game
            },
            food: None,
        };
    }

    FoodOutcome {
        game: GameStatus {
            score,
            result: GameResult::InProgress,
            ..game
        },
        food: Some(food::place(rng, config)),
    }
}

/// Puts `new_head` in front of the body and drops the tail unless the snake grew.
#[must_use]
pub fn build_next_snake(snake: &Snake, new_head: Position, grew: bool) -> Snake {
    let kept = if grew {
        snake.segments()
    } else {
        &snake.segments()[..snake.len().saturating_sub(1)]
    };

    let mut segments = Vec::with_capacity(kept.len() + 1);
    segments.push(new_head);
    segments.extend_from_slice(kept);
    Snake::from_segments(segments)
}

/// Advances the game by one tick.
///
/// Order matters: walls are checked before food, and the self-collision check
/// runs on the body after growth, so the cell the tail just left is free.
pub fn tick<R: Rng + ?Sized>(snapshot: &Snapshot, config: &Config, rng: &mut R) -> TickUpdate {
    if snapshot.game.result.is_terminal() {
        return TickUpdate::default();
    }

    let Some(head) = snapshot.snake.head() else {
        return TickUpdate::default();
    };
    let new_head = move_head(head, snapshot.game.direction, config.slot_size);

    if is_wall_collision(new_head, config) {
        return TickUpdate {
            snake: Some(build_next_snake(&snapshot.snake, new_head, false)),
            food: None,
            game: Some(snapshot.game.lost()),
            lose_cause: Some(LoseCause::WallCollision),
        };
    }

    let outcome = handle_food_consumption(new_head, snapshot.food, snapshot.game, config, rng);
    let grew = outcome.food.is_some() || outcome.game.result == GameResult::Win;
    let next_snake = build_next_snake(&snapshot.snake, new_head, grew);

    if is_self_collision(next_snake.segments()) {
        return TickUpdate {
            snake: Some(next_snake),
            food: outcome.food,
            game: Some(snapshot.game.lost()),
            lose_cause: Some(LoseCause::SelfCollision),
        };
    }

    TickUpdate {
        snake: Some(next_snake),
        food: outcome.food,
        game: Some(outcome.game),
        lose_cause: None,
    }
}
