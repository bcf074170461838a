//! Per-tick simulation systems, run in a fixed order by the engine.

pub mod cleanup;
pub mod collision;
pub mod motion;
pub mod snapshot;
pub mod spawner;

use hecs::World;
use starfall_core::components::PlayerShip;
use starfall_core::types::Position;

/// Find the player's position (top-left of the hull), if a player exists.
pub(crate) fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&PlayerShip, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}
