//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position in arena coordinates. Origin is the top-left corner,
/// y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity in arena units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Distance to another position.
    pub fn range_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Unique entity identity: strictly increasing, starts at 1, never reused
/// within a session. One counter is shared across all entity kinds so ids
/// never collide between collections.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(pub u64);

/// Hands out `EntityId`s from a single monotonic counter.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    /// Allocate the next id.
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

/// Simulation clock, advanced only by explicit `step` calls — never read
/// from ambient wall time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimClock {
    /// Current tick number (increments by 1 per stepped frame).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub now_ms: u64,
}

impl SimClock {
    /// Advance by one tick of `dt_ms` elapsed time.
    pub fn advance(&mut self, dt_ms: u32) {
        self.tick += 1;
        self.now_ms += u64::from(dt_ms);
    }
}

/// Level reached for a score: one level per 500 points, starting at 1.
pub fn level_for_score(score: u32) -> u32 {
    score / crate::constants::SCORE_PER_LEVEL + 1
}
