//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods beyond small
//! accessors. Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, ParticleColor, PowerUpKind, WeaponKind};

/// Marks the player's ship entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// A bullet fired by the player, moving up the arena (-y).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    /// Arena units moved per tick.
    pub speed: f32,
    pub damage: u32,
    pub kind: WeaponKind,
}

/// A bullet fired by an enemy, moving down the arena (+y).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub speed: f32,
    pub damage: u32,
}

/// Cooldown-gated gun state for shooting enemies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GunState {
    /// Minimum interval between shots (ms).
    pub cooldown_ms: u64,
    /// Clock time of the last shot; `None` until the first shot, so a
    /// freshly spawned gun is immediately ready.
    pub last_shot_ms: Option<u64>,
}

impl GunState {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            last_shot_ms: None,
        }
    }

    /// Whether the gun may fire at `now_ms`.
    pub fn ready(&self, now_ms: u64) -> bool {
        self.last_shot_ms
            .map_or(true, |last| now_ms - last > self.cooldown_ms)
    }
}

/// Enemy behavior variant. Each kind carries only the fields its movement
/// and shooting rules use; kinds without a gun or a strafe direction have
/// neither.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum EnemyBehavior {
    /// Tumbles straight down at its descent speed.
    Asteroid,
    /// Zigzags across the arena while descending, firing single shots.
    Fighter { direction: f32, gun: GunState },
    /// Slow straight descent, firing three-bullet spreads.
    Bomber { gun: GunState },
    /// Sweeps side to side, stepping down on each edge bounce and firing
    /// five-bullet fans across its width.
    Boss { direction: f32, gun: GunState },
}

/// An enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub behavior: EnemyBehavior,
    /// Descent rate in arena units per tick.
    pub speed: f32,
    /// Extent of the enemy; its collision radius is `size / 2`.
    pub size: f32,
    /// Remaining hit points; the enemy dies at 0 or below.
    pub health: i32,
    pub max_health: i32,
}

impl Enemy {
    /// Category tag for scoring and rendering.
    pub fn kind(&self) -> EnemyKind {
        match self.behavior {
            EnemyBehavior::Asteroid => EnemyKind::Asteroid,
            EnemyBehavior::Fighter { .. } => EnemyKind::Fighter,
            EnemyBehavior::Bomber { .. } => EnemyKind::Bomber,
            EnemyBehavior::Boss { .. } => EnemyKind::Boss,
        }
    }
}

/// A falling power-up pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

/// A cosmetic explosion/impact particle. Never participates in collisions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// Remaining life in ticks; despawned at 0.
    pub life: u32,
    pub max_life: u32,
    pub color: ParticleColor,
    pub size: f32,
}
