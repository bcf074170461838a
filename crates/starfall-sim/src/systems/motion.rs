//! Motion system — advances every mobile entity by its kind-specific rule
//! and handles fire triggers: the player's guns, the special attack, and
//! enemy guns.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::{Bullet, Enemy, EnemyBehavior, EnemyBullet, Particle, PlayerShip, PowerUp};
use starfall_core::constants::*;
use starfall_core::enums::{EffectKind, ParticleColor, WeaponKind};
use starfall_core::events::GameEvent;
use starfall_core::intent::ControlIntent;
use starfall_core::types::{IdAllocator, Position, SimClock, Velocity};

use crate::timers::TimerBank;
use crate::world_setup;

/// Run all motion and fire triggers for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    clock: &SimClock,
    timers: &mut TimerBank,
    intent: &ControlIntent,
    last_player_shot_ms: &mut Option<u64>,
    events: &mut Vec<GameEvent>,
) {
    move_player(world, intent);
    fire_player_guns(world, ids, clock, timers, intent, last_player_shot_ms);
    fire_special_attack(world, rng, ids, timers, intent, events);
    advance_bullets(world);
    advance_enemies(world, rng, ids, clock);
    advance_power_ups(world);
    advance_particles(world);
}

/// Player: horizontal motion only, clamped to the arena.
fn move_player(world: &mut World, intent: &ControlIntent) {
    for (_entity, (_ship, pos)) in world.query_mut::<(&PlayerShip, &mut Position)>() {
        let x = pos.0.x + intent.move_dx() * PLAYER_SPEED;
        pos.0.x = x.clamp(0.0, ARENA_WIDTH - PLAYER_WIDTH);
    }
}

/// Fire the player's guns while the fire intent is held and the shot
/// interval has elapsed. Multi-shot spawns three bullets, laser upgrades
/// kind and damage.
fn fire_player_guns(
    world: &mut World,
    ids: &mut IdAllocator,
    clock: &SimClock,
    timers: &TimerBank,
    intent: &ControlIntent,
    last_player_shot_ms: &mut Option<u64>,
) {
    if !intent.firing {
        return;
    }
    let interval = if timers.is_active(EffectKind::RapidFire) {
        RAPID_FIRE_INTERVAL_MS
    } else {
        FIRE_INTERVAL_MS
    };
    let ready = last_player_shot_ms.map_or(true, |last| clock.now_ms - last > interval);
    if !ready {
        return;
    }
    let Some(pos) = super::player_position(world) else {
        return;
    };

    let (kind, damage) = if timers.is_active(EffectKind::Laser) {
        (WeaponKind::Laser, LASER_DAMAGE)
    } else {
        (WeaponKind::Normal, NORMAL_DAMAGE)
    };

    let muzzle = Vec2::new(pos.0.x + PLAYER_WIDTH / 2.0 - 2.0, pos.0.y);
    let mut points = vec![muzzle];
    if timers.is_active(EffectKind::MultiShot) {
        points.push(muzzle + Vec2::new(-8.0, 10.0));
        points.push(muzzle + Vec2::new(8.0, 10.0));
    }
    for point in points {
        world.spawn((
            ids.allocate(),
            Bullet {
                speed: BULLET_SPEED,
                damage,
                kind,
            },
            Position(point),
        ));
    }
    *last_player_shot_ms = Some(clock.now_ms);
}

/// Special attack: a wide beam of closely spaced plasma bullets, gated by
/// the cooldown timer. Firing re-arms the cooldown.
fn fire_special_attack(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    timers: &mut TimerBank,
    intent: &ControlIntent,
    events: &mut Vec<GameEvent>,
) {
    if !intent.special_attack || !timers.special_attack_ready() {
        return;
    }
    let Some(pos) = super::player_position(world) else {
        return;
    };

    let beam_left = pos.0.x + PLAYER_WIDTH / 2.0
        - SPECIAL_BEAM_BULLETS as f32 * SPECIAL_BEAM_SPACING / 2.0;
    for i in 0..SPECIAL_BEAM_BULLETS {
        world.spawn((
            ids.allocate(),
            Bullet {
                speed: SPECIAL_BULLET_SPEED,
                damage: SPECIAL_BULLET_DAMAGE,
                kind: WeaponKind::Plasma,
            },
            Position::new(beam_left + i as f32 * SPECIAL_BEAM_SPACING, pos.0.y),
        ));
    }
    world_setup::spawn_particles(
        world,
        rng,
        ids,
        Vec2::new(pos.0.x + PLAYER_WIDTH / 2.0, pos.0.y),
        ParticleColor::SpecialCharge,
        SPECIAL_CHARGE_PARTICLES,
    );
    timers.arm_special_attack_cooldown();
    events.push(GameEvent::SpecialAttack);
}

/// Linear bullet motion: player bullets rise, enemy bullets fall.
fn advance_bullets(world: &mut World) {
    for (_entity, (bullet, pos)) in world.query_mut::<(&Bullet, &mut Position)>() {
        pos.0.y -= bullet.speed;
    }
    for (_entity, (bullet, pos)) in world.query_mut::<(&EnemyBullet, &mut Position)>() {
        pos.0.y += bullet.speed;
    }
}

/// A shot queued by an enemy gun during the movement pass; spawned after
/// the query ends to avoid mutating the world mid-iteration.
struct PendingShot {
    position: Vec2,
    speed: f32,
    damage: u32,
}

/// Advance every enemy by its behavior rule and collect gun triggers.
fn advance_enemies(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    clock: &SimClock,
) {
    let mut shots: Vec<PendingShot> = Vec::new();

    for (_entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &mut Position)>() {
        let size = enemy.size;
        let speed = enemy.speed;
        match &mut enemy.behavior {
            EnemyBehavior::Asteroid => {
                pos.0.y += speed;
            }
            EnemyBehavior::Fighter { direction, gun } => {
                pos.0.x += *direction * FIGHTER_STRAFE_SPEED;
                if pos.0.x <= 0.0 || pos.0.x >= ARENA_WIDTH - size {
                    *direction = -*direction;
                }
                pos.0.y += speed;

                if gun.ready(clock.now_ms) {
                    shots.push(PendingShot {
                        position: Vec2::new(pos.0.x + size / 2.0, pos.0.y + size),
                        speed: ENEMY_BULLET_SPEED,
                        damage: FIGHTER_BULLET_DAMAGE,
                    });
                    gun.last_shot_ms = Some(clock.now_ms);
                }
            }
            EnemyBehavior::Bomber { gun } => {
                pos.0.y += speed;

                if gun.ready(clock.now_ms) {
                    let base = Vec2::new(pos.0.x + size / 2.0, pos.0.y + size);
                    for offset in [-BOMBER_SPREAD_OFFSET, 0.0, BOMBER_SPREAD_OFFSET] {
                        shots.push(PendingShot {
                            position: base + Vec2::new(offset, 0.0),
                            speed: ENEMY_BULLET_SPEED,
                            damage: BOMBER_BULLET_DAMAGE,
                        });
                    }
                    gun.last_shot_ms = Some(clock.now_ms);
                }
            }
            EnemyBehavior::Boss { direction, gun } => {
                pos.0.x += *direction * BOSS_STRAFE_SPEED;
                // The boss holds altitude except for a fixed drop on each bounce.
                if pos.0.x <= 0.0 || pos.0.x >= ARENA_WIDTH - size {
                    *direction = -*direction;
                    pos.0.y += BOSS_EDGE_DROP;
                }

                if gun.ready(clock.now_ms) {
                    for i in 0..BOSS_FAN_BULLETS {
                        shots.push(PendingShot {
                            position: Vec2::new(
                                pos.0.x + size / BOSS_FAN_BULLETS as f32 * i as f32,
                                pos.0.y + size,
                            ),
                            speed: ENEMY_BULLET_SPEED
                                + rng.gen_range(0.0..BOSS_BULLET_SPEED_JITTER),
                            damage: BOSS_BULLET_DAMAGE,
                        });
                    }
                    gun.last_shot_ms = Some(clock.now_ms);
                }
            }
        }
    }

    for shot in shots {
        world.spawn((
            ids.allocate(),
            EnemyBullet {
                speed: shot.speed,
                damage: shot.damage,
            },
            Position(shot.position),
        ));
    }
}

/// Power-ups fall at a constant rate.
fn advance_power_ups(world: &mut World) {
    for (_entity, (_power_up, pos)) in world.query_mut::<(&PowerUp, &mut Position)>() {
        pos.0.y += POWER_UP_FALL_SPEED;
    }
}

/// Particles drift with decaying velocity and burn down their life.
fn advance_particles(world: &mut World) {
    for (_entity, (particle, pos, vel)) in
        world.query_mut::<(&mut Particle, &mut Position, &mut Velocity)>()
    {
        pos.0 += vel.0;
        vel.0 *= PARTICLE_DRAG;
        particle.life = particle.life.saturating_sub(1);
    }
}
