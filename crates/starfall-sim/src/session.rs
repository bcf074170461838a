//! Session-level progression state tracked by the engine.

use starfall_core::constants::PLAYER_MAX_HEALTH;
use starfall_core::events::GameEvent;
use starfall_core::types::level_for_score;

/// Score, level, and hull integrity for the current game.
#[derive(Debug, Clone, Copy)]
pub struct SessionState {
    pub score: u32,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
        }
    }
}

impl SessionState {
    /// Add score and recompute the level. The level only ever increases;
    /// a LevelUp event is raised when it does.
    pub fn add_score(&mut self, points: u32, events: &mut Vec<GameEvent>) {
        self.score += points;
        let reached = level_for_score(self.score);
        if reached > self.level {
            self.level = reached;
            events.push(GameEvent::LevelUp { level: reached });
        }
    }

    /// Apply damage, saturating at zero. Multiple lethal hits in one tick
    /// all pass through here; observable health never goes below zero.
    pub fn apply_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    /// Heal up to max health.
    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(self.max_health);
    }
}
