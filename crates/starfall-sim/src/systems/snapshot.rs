//! Snapshot system: queries the ECS world and builds a complete
//! WorldSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use starfall_core::components::{Bullet, Enemy, EnemyBullet, Particle, PowerUp};
use starfall_core::enums::{EffectKind, GamePhase};
use starfall_core::events::GameEvent;
use starfall_core::state::*;
use starfall_core::types::{EntityId, Position, SimClock};

use crate::session::SessionState;
use crate::timers::TimerBank;

/// Build a complete WorldSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    clock: &SimClock,
    phase: GamePhase,
    session: &SessionState,
    timers: &TimerBank,
    events: Vec<GameEvent>,
) -> WorldSnapshot {
    WorldSnapshot {
        clock: *clock,
        phase,
        score: session.score,
        level: session.level,
        health: session.health,
        max_health: session.max_health,
        effects: timers.view(),
        player: build_player(world, timers),
        bullets: build_bullets(world),
        enemy_bullets: build_enemy_bullets(world),
        enemies: build_enemies(world),
        power_ups: build_power_ups(world),
        particles: build_particles(world),
        events,
    }
}

fn build_player(world: &World, timers: &TimerBank) -> PlayerView {
    super::player_position(world)
        .map(|position| PlayerView {
            position,
            shielded: timers.is_active(EffectKind::Shield),
        })
        .unwrap_or_default()
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<BulletView> = world
        .query::<(&EntityId, &Bullet, &Position)>()
        .iter()
        .map(|(_, (id, bullet, pos))| BulletView {
            id: *id,
            position: *pos,
            kind: bullet.kind,
            damage: bullet.damage,
        })
        .collect();
    bullets.sort_by_key(|b| b.id);
    bullets
}

fn build_enemy_bullets(world: &World) -> Vec<EnemyBulletView> {
    let mut bullets: Vec<EnemyBulletView> = world
        .query::<(&EntityId, &EnemyBullet, &Position)>()
        .iter()
        .map(|(_, (id, bullet, pos))| EnemyBulletView {
            id: *id,
            position: *pos,
            damage: bullet.damage,
        })
        .collect();
    bullets.sort_by_key(|b| b.id);
    bullets
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EntityId, &Enemy, &Position)>()
        .iter()
        .map(|(_, (id, enemy, pos))| EnemyView {
            id: *id,
            position: *pos,
            kind: enemy.kind(),
            size: enemy.size,
            health: enemy.health,
            max_health: enemy.max_health,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    let mut power_ups: Vec<PowerUpView> = world
        .query::<(&EntityId, &PowerUp, &Position)>()
        .iter()
        .map(|(_, (id, power_up, pos))| PowerUpView {
            id: *id,
            position: *pos,
            kind: power_up.kind,
        })
        .collect();
    power_ups.sort_by_key(|p| p.id);
    power_ups
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    let mut particles: Vec<ParticleView> = world
        .query::<(&EntityId, &Particle, &Position)>()
        .iter()
        .map(|(_, (id, particle, pos))| ParticleView {
            id: *id,
            position: *pos,
            color: particle.color,
            size: particle.size,
            opacity: particle.life as f32 / particle.max_life as f32,
        })
        .collect();
    particles.sort_by_key(|p| p.id);
    particles
}
