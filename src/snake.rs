use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Board position in pixels. Always a multiple of the slot size during play;
/// a head pushed through a wall may briefly sit outside the board.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts this pixel position into a `(column, row)` slot index, or
    /// `None` when it is outside the board.
    #[must_use]
    pub fn slot(self, config: &Config) -> Option<(u16, u16)> {
        if is_wall_collision(self, config) {
            return None;
        }

        let slot = i32::from(config.slot_size);
        let column = u16::try_from(self.x / slot).ok()?;
        let row = u16::try_from(self.y / slot).ok()?;
        Some((column, row))
    }
}

/// Unit movement vector. `(0, 0)` means the snake has no direction yet.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub x: i32,
    pub y: i32,
}

impl Direction {
    pub const NONE: Self = Self { x: 0, y: 0 };
    pub const UP: Self = Self { x: 0, y: -1 };
    pub const DOWN: Self = Self { x: 0, y: 1 };
    pub const LEFT: Self = Self { x: -1, y: 0 };
    pub const RIGHT: Self = Self { x: 1, y: 0 };

    /// Returns true when moving along the horizontal axis.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.x != 0
    }

    /// Returns true when moving along the vertical axis.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self.y != 0
    }
}

/// Ordered snake segments, head first.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Snake {
    segments: Vec<Position>,
}

impl Snake {
    /// Creates a one-segment snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            segments: vec![start],
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self { segments }
    }

    /// Returns the head, or `None` for a degenerate empty snake.
    #[must_use]
    pub fn head(&self) -> Option<Position> {
        self.segments.first().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }
}

/// Moves `head` one slot along `direction`. A zero direction leaves it in place.
#[must_use]
pub fn move_head(head: Position, direction: Direction, slot_size: u16) -> Position {
    let slot = i32::from(slot_size);
    Position {
        x: head.x.saturating_add(direction.x.saturating_mul(slot)),
        y: head.y.saturating_add(direction.y.saturating_mul(slot)),
    }
}

/// Returns true when `head` lies outside the playable area.
#[must_use]
pub fn is_wall_collision(head: Position, config: &Config) -> bool {
    head.x < 0
        || head.x >= config.board_width_px()
        || head.y < 0
        || head.y >= config.board_height_px()
}

/// Exact coordinate match between head and food.
#[must_use]
pub fn has_eaten_food(head: Position, food: Position) -> bool {
    head == food
}

/// Returns true if the first segment shares coordinates with any later one.
/// An empty or single-segment body never collides.
#[must_use]
pub fn is_self_collision(segments: &[Position]) -> bool {
    let Some((head, body)) = segments.split_first() else {
        return false;
    };

    body.contains(head)
}

#[cfg(test)]
mod tests {
    use super::{
        Direction, Position, Snake, has_eaten_food, is_self_collision, is_wall_collision,
        move_head,
    };
    use crate::config::Config;

    #[test]
    fn head_moves_one_slot_in_each_direction() {
        let head = Position::new(100, 100);

        assert_eq!(move_head(head, Direction::RIGHT, 20), Position::new(120, 100));
        assert_eq!(move_head(head, Direction::LEFT, 20), Position::new(80, 100));
        assert_eq!(move_head(head, Direction::UP, 20), Position::new(100, 80));
        assert_eq!(move_head(head, Direction::DOWN, 20), Position::new(100, 120));
    }

    #[test]
    fn zero_direction_keeps_head_in_place() {
        let head = Position::new(60, 140);

        assert_eq!(move_head(head, Direction::NONE, 20), head);
    }

    #[test]
    fn wall_collision_on_every_edge() {
        let config = Config::default();

        assert!(is_wall_collision(Position::new(-20, 100), &config));
        assert!(is_wall_collision(Position::new(400, 100), &config));
        assert!(is_wall_collision(Position::new(100, -20), &config));
        assert!(is_wall_collision(Position::new(100, 400), &config));
    }

    #[test]
    fn board_corners_are_inside() {
        let config = Config::default();

        assert!(!is_wall_collision(Position::new(0, 0), &config));
        assert!(!is_wall_collision(Position::new(380, 380), &config));
        assert!(!is_wall_collision(Position::new(100, 100), &config));
    }

    #[test]
    fn food_match_is_exact() {
        let head = Position::new(100, 100);

        assert!(has_eaten_food(head, Position::new(100, 100)));
        assert!(!has_eaten_food(head, Position::new(101, 100)));
        assert!(!has_eaten_food(head, Position::new(100, 120)));
        assert_eq!(
            has_eaten_food(head, Position::new(120, 100)),
            has_eaten_food(Position::new(120, 100), head)
        );
    }

    #[test]
    fn single_segment_never_self_collides() {
        assert!(!is_self_collision(&[Position::new(100, 100)]));
        assert!(!is_self_collision(&[]));
    }

    #[test]
    fn head_overlapping_body_is_a_collision() {
        let snake = Snake::from_segments(vec![
            Position::new(100, 100),
            Position::new(120, 100),
            Position::new(100, 100),
        ]);

        assert!(is_self_collision(snake.segments()));
    }

    #[test]
    fn slot_maps_pixels_to_cells() {
        let config = Config::default();

        assert_eq!(Position::new(0, 0).slot(&config), Some((0, 0)));
        assert_eq!(Position::new(380, 40).slot(&config), Some((19, 2)));
        assert_eq!(Position::new(-20, 40).slot(&config), None);
    }
}
