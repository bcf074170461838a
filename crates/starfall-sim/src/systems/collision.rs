//! Collision resolver — detects and resolves all pairwise interactions
//! and applies the resulting score, health, and effect deltas.
//!
//! Bullet-vs-enemy hits are computed from immutable snapshots of both
//! collections sorted by entity id, accumulated as per-enemy deltas, and
//! applied afterwards. This keeps the pass free of mutate-while-iterating
//! hazards and makes claim order stable.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::{Bullet, Enemy, EnemyBullet, PowerUp};
use starfall_core::constants::*;
use starfall_core::enums::{EffectKind, EnemyKind, ParticleColor, PowerUpKind};
use starfall_core::events::GameEvent;
use starfall_core::types::{EntityId, IdAllocator, Position};

use crate::session::SessionState;
use crate::timers::TimerBank;
use crate::world_setup;

/// Run all collision passes for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    timers: &mut TimerBank,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    resolve_bullet_hits(world, rng, ids, session, events, despawn_buffer);
    resolve_enemy_rams(world, rng, ids, timers, session, events);
    resolve_enemy_bullet_hits(world, rng, ids, timers, session, events, despawn_buffer);
    resolve_power_up_pickups(world, rng, ids, timers, session, events, despawn_buffer);
}

/// Score awarded for destroying an enemy of the given kind.
fn score_for(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Asteroid => SCORE_ASTEROID,
        EnemyKind::Fighter => SCORE_FIGHTER,
        EnemyKind::Bomber => SCORE_BOMBER,
        EnemyKind::Boss => SCORE_BOSS,
    }
}

/// The player's collision center, if a player exists.
fn player_center(world: &World) -> Option<Vec2> {
    super::player_position(world)
        .map(|pos| pos.0 + Vec2::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0))
}

/// Snapshot of a player bullet taken before resolution.
struct Shot {
    entity: Entity,
    id: EntityId,
    position: Vec2,
    damage: u32,
}

/// Snapshot of an enemy taken before resolution.
struct Target {
    entity: Entity,
    id: EntityId,
    center: Vec2,
    radius: f32,
}

/// Bullet vs enemy. Each bullet claims at most the first in-range enemy in
/// id order; the bullet is consumed whether or not the enemy dies.
fn resolve_bullet_hits(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut shots: Vec<Shot> = world
        .query::<(&EntityId, &Bullet, &Position)>()
        .iter()
        .map(|(entity, (id, bullet, pos))| Shot {
            entity,
            id: *id,
            position: pos.0,
            damage: bullet.damage,
        })
        .collect();
    shots.sort_by_key(|s| s.id);

    let mut targets: Vec<Target> = world
        .query::<(&EntityId, &Enemy, &Position)>()
        .iter()
        .map(|(entity, (id, enemy, pos))| Target {
            entity,
            id: *id,
            center: pos.0 + Vec2::splat(enemy.size / 2.0),
            radius: enemy.size / 2.0 + BULLET_RADIUS,
        })
        .collect();
    targets.sort_by_key(|t| t.id);

    // Accumulated (damage, hit count) per target, applied after matching.
    let mut deltas = vec![(0u32, 0u32); targets.len()];
    for shot in &shots {
        let claimed = targets
            .iter()
            .position(|t| shot.position.distance(t.center) < t.radius);
        if let Some(index) = claimed {
            deltas[index].0 += shot.damage;
            deltas[index].1 += 1;
            despawn_buffer.push(shot.entity);
        }
    }

    for (target, &(damage, hits)) in targets.iter().zip(&deltas) {
        if hits == 0 {
            continue;
        }
        world_setup::spawn_particles(
            world,
            rng,
            ids,
            target.center,
            ParticleColor::EnemyHit,
            ENEMY_HIT_PARTICLES * hits,
        );

        let mut died = false;
        let mut kind = EnemyKind::Asteroid;
        if let Ok(mut enemy) = world.get::<&mut Enemy>(target.entity) {
            enemy.health -= damage as i32;
            died = enemy.health <= 0;
            kind = enemy.kind();
        }
        if !died {
            continue;
        }

        world_setup::spawn_particles(
            world,
            rng,
            ids,
            target.center,
            ParticleColor::Explosion,
            EXPLOSION_PARTICLES,
        );
        if rng.gen_bool(POWER_UP_DROP_CHANCE) {
            let drop = world_setup::random_power_up_kind(rng);
            world_setup::spawn_power_up(world, ids, drop, Position(target.center));
        }

        let points = score_for(kind);
        session.add_score(points, events);
        events.push(GameEvent::EnemyDestroyed {
            id: target.id,
            kind,
            score: points,
        });
        despawn_buffer.push(target.entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Enemy vs player: every overlapping enemy deals full contact damage and
/// persists. Skipped entirely while the shield is active.
fn resolve_enemy_rams(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    timers: &TimerBank,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
) {
    if timers.is_active(EffectKind::Shield) {
        return;
    }
    let Some(center) = player_center(world) else {
        return;
    };

    let mut rams = 0u32;
    for (_entity, (enemy, pos)) in world.query::<(&Enemy, &Position)>().iter() {
        let enemy_center = pos.0 + Vec2::splat(enemy.size / 2.0);
        if center.distance(enemy_center) < enemy.size / 2.0 + PLAYER_RADIUS {
            rams += 1;
        }
    }

    for _ in 0..rams {
        session.apply_damage(ENEMY_RAM_DAMAGE);
        events.push(GameEvent::PlayerHit {
            damage: ENEMY_RAM_DAMAGE,
        });
        world_setup::spawn_particles(
            world,
            rng,
            ids,
            center,
            ParticleColor::PlayerDamage,
            PLAYER_RAM_PARTICLES,
        );
    }
}

/// Enemy bullet vs player: each hit consumes the bullet. Skipped while the
/// shield is active.
#[allow(clippy::too_many_arguments)]
fn resolve_enemy_bullet_hits(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    timers: &TimerBank,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    if timers.is_active(EffectKind::Shield) {
        return;
    }
    let Some(center) = player_center(world) else {
        return;
    };

    let mut hits: Vec<(Entity, u32)> = Vec::new();
    for (entity, (bullet, pos)) in world.query::<(&EnemyBullet, &Position)>().iter() {
        if center.distance(pos.0) < PLAYER_RADIUS + ENEMY_BULLET_RADIUS {
            hits.push((entity, bullet.damage));
        }
    }

    for (entity, damage) in hits {
        session.apply_damage(damage);
        events.push(GameEvent::PlayerHit { damage });
        world_setup::spawn_particles(
            world,
            rng,
            ids,
            center,
            ParticleColor::PlayerDamage,
            PLAYER_BULLET_HIT_PARTICLES,
        );
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Power-up vs player: pickups are never blocked by the shield.
#[allow(clippy::too_many_arguments)]
fn resolve_power_up_pickups(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    timers: &mut TimerBank,
    session: &mut SessionState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let Some(center) = player_center(world) else {
        return;
    };

    let mut picked: Vec<(Entity, PowerUpKind, Vec2)> = Vec::new();
    for (entity, (power_up, pos)) in world.query::<(&PowerUp, &Position)>().iter() {
        let pickup_center = pos.0 + Vec2::splat(POWER_UP_HALF_SIZE);
        if center.distance(pickup_center) < POWER_UP_PICKUP_RADIUS {
            picked.push((entity, power_up.kind, pickup_center));
        }
    }

    for (entity, kind, pickup_center) in picked {
        world_setup::spawn_particles(
            world,
            rng,
            ids,
            pickup_center,
            ParticleColor::Pickup,
            PICKUP_PARTICLES,
        );
        match kind {
            PowerUpKind::Health => session.heal(HEALTH_PICKUP_AMOUNT),
            timed => timers.activate(timed),
        }
        events.push(GameEvent::PowerUpCollected { kind });
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
