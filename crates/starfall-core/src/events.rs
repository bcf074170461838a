//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, PowerUpKind};
use crate::types::EntityId;

/// Per-tick events, drained into the snapshot after every step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy was destroyed by player fire.
    EnemyDestroyed {
        id: EntityId,
        kind: EnemyKind,
        score: u32,
    },
    /// The player took damage from a ram or an enemy bullet.
    PlayerHit { damage: u32 },
    /// A power-up was collected.
    PowerUpCollected { kind: PowerUpKind },
    /// The level increased.
    LevelUp { level: u32 },
    /// The special attack beam was unleashed.
    SpecialAttack,
    /// Player health reached zero.
    GameOver { score: u32, level: u32 },
}
