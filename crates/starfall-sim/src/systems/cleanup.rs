//! Cleanup system: removes entities that left the arena or expired.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use starfall_core::components::{Bullet, Enemy, EnemyBullet, Particle, PowerUp};
use starfall_core::constants::*;
use starfall_core::types::Position;

/// Sweep all collections and despawn everything past its margin or out of
/// life. This is the only place entities are removed outside collision
/// resolution.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_bullet, pos)) in world.query_mut::<(&Bullet, &Position)>() {
        if pos.0.y < -BULLET_DESPAWN_MARGIN {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_bullet, pos)) in world.query_mut::<(&EnemyBullet, &Position)>() {
        if pos.0.y > ARENA_HEIGHT + BULLET_DESPAWN_MARGIN {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_enemy, pos)) in world.query_mut::<(&Enemy, &Position)>() {
        if pos.0.y > ARENA_HEIGHT + ENEMY_DESPAWN_MARGIN {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_power_up, pos)) in world.query_mut::<(&PowerUp, &Position)>() {
        if pos.0.y > ARENA_HEIGHT + POWER_UP_DESPAWN_MARGIN {
            despawn_buffer.push(entity);
        }
    }

    for (entity, particle) in world.query_mut::<&Particle>() {
        if particle.life == 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
