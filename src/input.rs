use crate::snake::Direction;

/// The four directional keys the game reacts to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Unit vector this key asks for.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::Up => Direction::UP,
            Self::Down => Direction::DOWN,
            Self::Left => Direction::LEFT,
            Self::Right => Direction::RIGHT,
        }
    }
}

/// Result of checking a held key against the current direction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct KeyPressResult {
    pub valid: bool,
    /// The accepted direction, or `(0, 0)` when not valid.
    pub direction: Direction,
}

impl KeyPressResult {
    const INVALID: Self = Self {
        valid: false,
        direction: Direction::NONE,
    };
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Press(ArrowKey),
    Release(ArrowKey),
    Restart,
    Quit,
}

/// Accepts only turns perpendicular to the current axis of motion.
///
/// Up/Down need `current.y == 0`, Left/Right need `current.x == 0`, so
/// reversing and repeating the current heading are both rejected. From the
/// zero direction any key is accepted.
#[must_use]
pub fn validate_key_press(current: Direction, key: Option<ArrowKey>) -> KeyPressResult {
    let Some(key) = key else {
        return KeyPressResult::INVALID;
    };

    let allowed = match key {
        ArrowKey::Up | ArrowKey::Down => !current.is_vertical(),
        ArrowKey::Left | ArrowKey::Right => !current.is_horizontal(),
    };

    if !allowed {
        return KeyPressResult::INVALID;
    }

    KeyPressResult {
        valid: true,
        direction: key.direction(),
    }
}

/// Tracks which arrow key is currently held. The last key pressed wins.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct KeyTracker {
    held: Option<ArrowKey>,
}

impl KeyTracker {
    pub fn press(&mut self, key: ArrowKey) {
        self.held = Some(key);
    }

    /// Clears the held key, but only if `key` is the one being held.
    pub fn release(&mut self, key: ArrowKey) {
        if self.held == Some(key) {
            self.held = None;
        }
    }

    #[must_use]
    pub fn held(&self) -> Option<ArrowKey> {
        self.held
    }

    /// Validates the held key against `current`.
    #[must_use]
    pub fn result(&self, current: Direction) -> KeyPressResult {
        validate_key_press(current, self.held)
    }
}

#[cfg(test)]
mod tests {
    use super::{ArrowKey, KeyTracker, validate_key_press};
    use crate::snake::Direction;

    #[test]
    fn no_key_is_invalid() {
        let result = validate_key_press(Direction::RIGHT, None);

        assert!(!result.valid);
        assert_eq!(result.direction, Direction::NONE);
    }

    #[test]
    fn perpendicular_turns_are_accepted() {
        let cases = [
            (Direction::RIGHT, ArrowKey::Up, Direction::UP),
            (Direction::UP, ArrowKey::Left, Direction::LEFT),
            (Direction::LEFT, ArrowKey::Down, Direction::DOWN),
            (Direction::DOWN, ArrowKey::Right, Direction::RIGHT),
        ];

        for (current, key, expected) in cases {
            let result = validate_key_press(current, Some(key));
            assert!(result.valid, "{key:?} while moving {current:?}");
            assert_eq!(result.direction, expected);
        }
    }

    #[test]
    fn reversal_and_same_axis_are_rejected() {
        assert!(!validate_key_press(Direction::RIGHT, Some(ArrowKey::Left)).valid);
        assert!(!validate_key_press(Direction::RIGHT, Some(ArrowKey::Right)).valid);
        assert!(!validate_key_press(Direction::DOWN, Some(ArrowKey::Up)).valid);

        let rejected = validate_key_press(Direction::DOWN, Some(ArrowKey::Down));
        assert_eq!(rejected.direction, Direction::NONE);
    }

    #[test]
    fn any_key_leaves_the_zero_direction() {
        for key in [ArrowKey::Up, ArrowKey::Down, ArrowKey::Left, ArrowKey::Right] {
            assert!(validate_key_press(Direction::NONE, Some(key)).valid);
        }
    }

    #[test]
    fn release_clears_only_the_held_key() {
        let mut tracker = KeyTracker::default();

        tracker.press(ArrowKey::Up);
        tracker.release(ArrowKey::Left);
        assert_eq!(tracker.held(), Some(ArrowKey::Up));
        assert!(tracker.result(Direction::RIGHT).valid);

        tracker.release(ArrowKey::Up);
        assert_eq!(tracker.held(), None);
        assert!(!tracker.result(Direction::RIGHT).valid);
    }

    #[test]
    fn last_pressed_key_wins() {
        let mut tracker = KeyTracker::default();

        tracker.press(ArrowKey::Up);
        tracker.press(ArrowKey::Down);

        assert_eq!(tracker.held(), Some(ArrowKey::Down));
    }
}
