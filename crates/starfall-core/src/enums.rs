//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu state; no world exists.
    #[default]
    NotStarted,
    /// Simulation advancing.
    Playing,
    /// Simulation frozen; no ticks, spawns, or timer decrement.
    Paused,
    /// Terminal until an explicit reset or restart.
    GameOver,
}

/// Enemy category, used for scoring and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Asteroid,
    Fighter,
    Bomber,
    Boss,
}

/// Weapon type carried by a player bullet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Normal,
    Laser,
    Plasma,
}

/// Power-up pickup category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    RapidFire,
    Shield,
    MultiShot,
    Health,
    Laser,
}

impl PowerUpKind {
    /// The full drop table; both ambient spawns and kill drops roll
    /// uniformly over it.
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::RapidFire,
        PowerUpKind::Shield,
        PowerUpKind::MultiShot,
        PowerUpKind::Health,
        PowerUpKind::Laser,
    ];
}

/// A timed effect governed by the timer bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    RapidFire,
    Shield,
    MultiShot,
    Laser,
    SpecialAttackCooldown,
}

/// Particle palette entry; the renderer maps these to actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    /// A bullet struck an enemy.
    EnemyHit,
    /// An enemy was destroyed.
    Explosion,
    /// The player took damage.
    PlayerDamage,
    /// A power-up was collected.
    Pickup,
    /// The special attack beam charged.
    SpecialCharge,
}
