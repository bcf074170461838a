//! Timer bank — named countdowns governing timed effects and cooldowns.
//!
//! A flag such as "shield active" is never stored separately; it is
//! exactly `remaining > 0`, so flag and timer cannot desync.

use starfall_core::constants::*;
use starfall_core::enums::{EffectKind, PowerUpKind};
use starfall_core::state::EffectsView;

/// Countdown timers for every timed effect, in milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerBank {
    rapid_fire_ms: u32,
    shield_ms: u32,
    multi_shot_ms: u32,
    laser_ms: u32,
    special_attack_cooldown_ms: u32,
}

impl TimerBank {
    /// Advance all timers by the tick's elapsed time, clamping at zero.
    pub fn tick(&mut self, dt_ms: u32) {
        self.rapid_fire_ms = self.rapid_fire_ms.saturating_sub(dt_ms);
        self.shield_ms = self.shield_ms.saturating_sub(dt_ms);
        self.multi_shot_ms = self.multi_shot_ms.saturating_sub(dt_ms);
        self.laser_ms = self.laser_ms.saturating_sub(dt_ms);
        self.special_attack_cooldown_ms = self.special_attack_cooldown_ms.saturating_sub(dt_ms);
    }

    /// Remaining time of an effect in milliseconds.
    pub fn remaining(&self, kind: EffectKind) -> u32 {
        match kind {
            EffectKind::RapidFire => self.rapid_fire_ms,
            EffectKind::Shield => self.shield_ms,
            EffectKind::MultiShot => self.multi_shot_ms,
            EffectKind::Laser => self.laser_ms,
            EffectKind::SpecialAttackCooldown => self.special_attack_cooldown_ms,
        }
    }

    /// Whether the effect is currently active.
    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.remaining(kind) > 0
    }

    /// Apply a timed power-up pickup: the timer resets to its full
    /// duration. Picking up an already-active effect never stacks.
    pub fn activate(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::RapidFire => self.rapid_fire_ms = RAPID_FIRE_DURATION_MS,
            PowerUpKind::Shield => self.shield_ms = SHIELD_DURATION_MS,
            PowerUpKind::MultiShot => self.multi_shot_ms = MULTI_SHOT_DURATION_MS,
            PowerUpKind::Laser => self.laser_ms = LASER_DURATION_MS,
            // Health is instantaneous; the collision system heals directly.
            PowerUpKind::Health => {}
        }
    }

    /// Whether the special attack may fire.
    pub fn special_attack_ready(&self) -> bool {
        self.special_attack_cooldown_ms == 0
    }

    /// Arm the cooldown after a special attack fires.
    pub fn arm_special_attack_cooldown(&mut self) {
        self.special_attack_cooldown_ms = SPECIAL_ATTACK_COOLDOWN_MS;
    }

    /// Snapshot view of remaining times.
    pub fn view(&self) -> EffectsView {
        EffectsView {
            rapid_fire_ms: self.rapid_fire_ms,
            shield_ms: self.shield_ms,
            multi_shot_ms: self.multi_shot_ms,
            laser_ms: self.laser_ms,
            special_attack_cooldown_ms: self.special_attack_cooldown_ms,
        }
    }

    /// Force a timer to a specific remaining value (for tests).
    #[cfg(test)]
    pub fn set_remaining(&mut self, kind: EffectKind, ms: u32) {
        match kind {
            EffectKind::RapidFire => self.rapid_fire_ms = ms,
            EffectKind::Shield => self.shield_ms = ms,
            EffectKind::MultiShot => self.multi_shot_ms = ms,
            EffectKind::Laser => self.laser_ms = ms,
            EffectKind::SpecialAttackCooldown => self.special_attack_cooldown_ms = ms,
        }
    }
}
