use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Picks a cell uniformly over the whole grid.
///
/// Occupancy is not consulted: a fruit may land under the snake and stay
/// unreachable until the snake moves off it.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    debug_assert!(bounds.is_valid());

    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
