//! Entity spawn factories.
//!
//! Creates the player ship, enemies, power-ups, and particle bursts with
//! appropriate component bundles. Stat templates are parameterized by the
//! current level.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::{
    Enemy, EnemyBehavior, GunState, Particle, PlayerShip, PowerUp,
};
use starfall_core::constants::*;
use starfall_core::enums::{EnemyKind, ParticleColor, PowerUpKind};
use starfall_core::types::{IdAllocator, Position, Velocity};

/// Spawn the player's ship at the bottom center of the arena.
pub fn spawn_player(world: &mut World, ids: &mut IdAllocator) -> hecs::Entity {
    world.spawn((
        PlayerShip,
        ids.allocate(),
        Position::new(ARENA_WIDTH / 2.0 - PLAYER_WIDTH / 2.0, PLAYER_START_Y),
    ))
}

/// Spawn an enemy of the given kind just above the arena, using its
/// level-scaled stat template.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    kind: EnemyKind,
    level: u32,
) -> hecs::Entity {
    let level = level as f32;
    let (enemy, position) = match kind {
        EnemyKind::Asteroid => (
            Enemy {
                behavior: EnemyBehavior::Asteroid,
                speed: 2.0 + level * 0.5 + rng.gen_range(0.0..2.0),
                size: 30.0 + rng.gen_range(0.0..20.0),
                health: 1,
                max_health: 1,
            },
            Position::new(rng.gen_range(0.0..ARENA_WIDTH - 40.0), -40.0),
        ),
        EnemyKind::Fighter => (
            Enemy {
                behavior: EnemyBehavior::Fighter {
                    direction: if rng.gen_bool(0.5) { -1.0 } else { 1.0 },
                    gun: GunState::new(FIGHTER_SHOOT_COOLDOWN_MS),
                },
                speed: 2.0 + level * 0.3,
                size: 25.0,
                health: 2,
                max_health: 2,
            },
            Position::new(rng.gen_range(0.0..ARENA_WIDTH - 40.0), -40.0),
        ),
        EnemyKind::Bomber => (
            Enemy {
                behavior: EnemyBehavior::Bomber {
                    gun: GunState::new(BOMBER_SHOOT_COOLDOWN_MS),
                },
                speed: 1.0 + level * 0.2,
                size: 45.0,
                health: 5,
                max_health: 5,
            },
            Position::new(rng.gen_range(0.0..ARENA_WIDTH - 60.0), -60.0),
        ),
        EnemyKind::Boss => (
            Enemy {
                behavior: EnemyBehavior::Boss {
                    direction: 1.0,
                    gun: GunState::new(BOSS_SHOOT_COOLDOWN_MS),
                },
                speed: 0.5,
                size: 100.0,
                health: 20,
                max_health: 20,
            },
            // The boss enters centered.
            Position::new(ARENA_WIDTH / 2.0 - 50.0, -100.0),
        ),
    };

    world.spawn((ids.allocate(), enemy, position))
}

/// Spawn a power-up of the given kind at a position.
pub fn spawn_power_up(
    world: &mut World,
    ids: &mut IdAllocator,
    kind: PowerUpKind,
    position: Position,
) -> hecs::Entity {
    world.spawn((ids.allocate(), PowerUp { kind }, position))
}

/// Uniformly random power-up kind from the shared drop table.
pub fn random_power_up_kind(rng: &mut ChaCha8Rng) -> PowerUpKind {
    PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())]
}

/// Spawn a burst of cosmetic particles scattered around a point.
pub fn spawn_particles(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    center: Vec2,
    color: ParticleColor,
    count: u32,
) {
    for _ in 0..count {
        let offset = Vec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 8.0,
            (rng.gen::<f32>() - 0.5) * 8.0,
        );
        let size = rng.gen_range(2.0..6.0);
        world.spawn((
            ids.allocate(),
            Particle {
                life: PARTICLE_LIFE_TICKS,
                max_life: PARTICLE_LIFE_TICKS,
                color,
                size,
            },
            Position(center + offset),
            Velocity(velocity),
        ));
    }
}
