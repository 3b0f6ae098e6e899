use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::game::{self, GameResult, LoseCause, Snapshot};
use crate::input::{ArrowKey, KeyTracker};

/// Decouples the game-logic rate from the frame rate.
///
/// Fires on the first frame, then whenever strictly more than `interval`
/// has passed since the last accepted tick.
#[derive(Debug, Clone, Copy)]
pub struct TickGate {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl TickGate {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Returns true and records `now` when a tick is due.
    pub fn should_tick(&mut self, now: Instant) -> bool {
        let due = match self.last_tick {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.interval,
        };

        if due {
            self.last_tick = Some(now);
        }
        due
    }

    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}

/// Owns the single current snapshot and replaces it wholesale after each
/// tick. Everything the front-end needs to drive and draw a game goes
/// through here.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    snapshot: Snapshot,
    keys: KeyTracker,
    gate: TickGate,
    rng: StdRng,
    tick_count: u64,
    lose_cause: Option<LoseCause>,
}

impl Session {
    /// Creates a session with an entropy-seeded food source.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, mut rng: StdRng) -> Self {
        let snapshot = Snapshot::new(&config, &mut rng);
        let gate = TickGate::new(config.tick_interval());

        Self {
            config,
            snapshot,
            keys: KeyTracker::default(),
            gate,
            rng,
            tick_count: 0,
            lose_cause: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Mutable access for tests and tools that stage a specific position.
    pub fn snapshot_mut(&mut self) -> &mut Snapshot {
        &mut self.snapshot
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn lose_cause(&self) -> Option<LoseCause> {
        self.lose_cause
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.snapshot.game.result.is_terminal()
    }

    /// Key-down: the new key becomes the held key and, if it is a legal turn,
    /// the direction for the next tick.
    pub fn press(&mut self, key: ArrowKey) {
        self.keys.press(key);
        self.apply_held_key();
    }

    /// Key-up: forgets the key if it was the one held.
    pub fn release(&mut self, key: ArrowKey) {
        self.keys.release(key);
        self.apply_held_key();
    }

    fn apply_held_key(&mut self) {
        if self.is_finished() {
            return;
        }

        let result = self.keys.result(self.snapshot.game.direction);
        if result.valid {
            trace!(direction = ?result.direction, "direction accepted");
            self.snapshot.set_direction(result.direction);
        }
    }

    /// Runs one frame: ticks the engine if the gate allows it. Returns true
    /// when a tick ran.
    pub fn frame(&mut self, now: Instant) -> bool {
        if self.is_finished() || !self.gate.should_tick(now) {
            return false;
        }

        self.step();
        true
    }

    /// Advances exactly one tick, ignoring the gate.
    pub fn step(&mut self) {
        let update = game::tick(&self.snapshot, &self.config, &mut self.rng);
        if update.is_empty() {
            return;
        }

        self.tick_count += 1;
        let previous_score = self.snapshot.game.score;
        if let Some(cause) = update.lose_cause {
            self.lose_cause = Some(cause);
        }

        let current = std::mem::take(&mut self.snapshot);
        self.snapshot = current.apply(update);

        let game = self.snapshot.game;
        trace!(tick = self.tick_count, head = ?self.snapshot.snake.head(), "tick");
        if game.score != previous_score {
            debug!(score = game.score, length = self.snapshot.snake.len(), "food eaten");
        }

        match game.result {
            GameResult::Win => info!(score = game.score, ticks = self.tick_count, "game won"),
            GameResult::Lose => info!(
                score = game.score,
                ticks = self.tick_count,
                cause = ?self.lose_cause,
                "game lost"
            ),
            GameResult::InProgress => {}
        }
    }

    /// Starts a fresh game with the same config and random source.
    pub fn restart(&mut self) {
        self.snapshot = Snapshot::new(&self.config, &mut self.rng);
        self.keys = KeyTracker::default();
        self.gate.reset();
        self.tick_count = 0;
        self.lose_cause = None;
        info!("game restarted");
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{Session, TickGate};
    use crate::config::Config;
    use crate::game::{GameResult, LoseCause};
    use crate::input::ArrowKey;
    use crate::snake::{Direction, Position, Snake};

    #[test]
    fn gate_fires_first_then_only_after_interval() {
        let start = Instant::now();
        let mut gate = TickGate::new(Duration::from_millis(200));

        assert!(gate.should_tick(start));
        assert!(!gate.should_tick(start + Duration::from_millis(100)));
        assert!(!gate.should_tick(start + Duration::from_millis(200)));
        assert!(gate.should_tick(start + Duration::from_millis(201)));
        assert!(!gate.should_tick(start + Duration::from_millis(300)));
    }

    #[test]
    fn new_session_starts_heading_right_at_start_position() {
        let session = Session::with_seed(Config::default(), 1);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.snake.segments(), &[Position::new(100, 100)]);
        assert_eq!(snapshot.game.direction, Direction::RIGHT);
        assert_eq!(snapshot.game.score, 0);
        assert_eq!(snapshot.game.result, GameResult::InProgress);
    }

    #[test]
    fn frames_between_ticks_do_not_move_the_snake() {
        let start = Instant::now();
        let mut session = Session::with_seed(Config::default(), 2);
        session.snapshot_mut().food = Position::new(0, 0);

        assert!(session.frame(start));
        let head = session.snapshot().snake.head();
        assert!(!session.frame(start + Duration::from_millis(50)));
        assert_eq!(session.snapshot().snake.head(), head);

        assert!(session.frame(start + Duration::from_millis(250)));
        assert_ne!(session.snapshot().snake.head(), head);
        assert_eq!(session.tick_count(), 2);
    }

    #[test]
    fn reversal_request_is_ignored() {
        let mut session = Session::with_seed(Config::default(), 3);

        session.press(ArrowKey::Left);

        assert_eq!(session.snapshot().game.direction, Direction::RIGHT);
    }

    #[test]
    fn perpendicular_request_steers_the_next_tick() {
        let mut session = Session::with_seed(Config::default(), 4);
        session.snapshot_mut().food = Position::new(0, 0);

        session.press(ArrowKey::Up);
        session.release(ArrowKey::Up);
        session.step();

        assert_eq!(session.snapshot().game.direction, Direction::UP);
        assert_eq!(session.snapshot().snake.head(), Some(Position::new(100, 80)));
    }

    #[test]
    fn finished_session_ignores_frames_and_records_cause() {
        let mut session = Session::with_seed(Config::default(), 5);
        session.snapshot_mut().snake = Snake::new(Position::new(380, 100));
        session.snapshot_mut().food = Position::new(0, 0);

        session.step();
        assert!(session.is_finished());
        assert_eq!(session.lose_cause(), Some(LoseCause::WallCollision));

        let frozen = session.snapshot().clone();
        assert!(!session.frame(Instant::now() + Duration::from_secs(10)));
        session.step();
        assert_eq!(session.snapshot(), &frozen);
    }

    #[test]
    fn restart_resets_the_game() {
        let mut session = Session::with_seed(Config::default(), 6);
        session.snapshot_mut().snake = Snake::new(Position::new(380, 100));
        session.step();

        session.restart();

        assert!(!session.is_finished());
        assert_eq!(session.tick_count(), 0);
        assert_eq!(session.lose_cause(), None);
        assert_eq!(session.snapshot().snake.len(), 1);
    }
}
