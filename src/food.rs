use rand::Rng;

use crate::config::Config;
use crate::snake::Position;

/// Picks a uniformly random slot on the board and returns its pixel position.
///
/// The snake's body is not excluded, so food can land underneath it.
#[must_use]
pub fn place<R: Rng + ?Sized>(rng: &mut R, config: &Config) -> Position {
    let slot = i32::from(config.slot_size);
    let column = rng.gen_range(0..i32::from(config.cols));
    let row = rng.gen_range(0..i32::from(config.rows));

    Position {
        x: column * slot,
        y: row * slot,
    }
}
