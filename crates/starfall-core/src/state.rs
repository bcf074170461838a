//! World snapshot — the complete visible state handed to the renderer
//! after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, GamePhase, ParticleColor, PowerUpKind, WeaponKind};
use crate::events::GameEvent;
use crate::types::{EntityId, Position, SimClock};

/// Immutable view of the world after one tick. Entity lists are sorted
/// by id so equal worlds serialize identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub clock: SimClock,
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub effects: EffectsView,
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub enemy_bullets: Vec<EnemyBulletView>,
    pub enemies: Vec<EnemyView>,
    pub power_ups: Vec<PowerUpView>,
    pub particles: Vec<ParticleView>,
    /// Events raised during this tick, in order of occurrence.
    pub events: Vec<GameEvent>,
}

/// Remaining time of each timed effect, in milliseconds.
/// An effect is active iff its remaining time is greater than zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EffectsView {
    pub rapid_fire_ms: u32,
    pub shield_ms: u32,
    pub multi_shot_ms: u32,
    pub laser_ms: u32,
    pub special_attack_cooldown_ms: u32,
}

/// The player's ship for rendering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Top-left corner of the hull.
    pub position: Position,
    /// Derived from the shield timer; drawn as a bubble around the hull.
    pub shielded: bool,
}

/// A player bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletView {
    pub id: EntityId,
    pub position: Position,
    pub kind: WeaponKind,
    pub damage: u32,
}

/// An enemy bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyBulletView {
    pub id: EntityId,
    pub position: Position,
    pub damage: u32,
}

/// An enemy, with enough state to draw a health bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub position: Position,
    pub kind: EnemyKind,
    pub size: f32,
    pub health: i32,
    pub max_health: i32,
}

/// A falling power-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUpView {
    pub id: EntityId,
    pub position: Position,
    pub kind: PowerUpKind,
}

/// A cosmetic particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: EntityId,
    pub position: Position,
    pub color: ParticleColor,
    pub size: f32,
    /// life / max_life, in (0, 1].
    pub opacity: f32,
}
