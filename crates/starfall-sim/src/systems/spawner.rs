//! Spawn director — decides when and what to spawn based on elapsed time,
//! difficulty level, and randomness.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::constants::*;
use starfall_core::enums::EnemyKind;
use starfall_core::types::{IdAllocator, Position, SimClock};

use crate::world_setup;

/// Spawn timing state, reset on every new game.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnDirector {
    last_enemy_spawn_ms: u64,
    last_power_up_spawn_ms: u64,
}

impl SpawnDirector {
    /// Interval between enemy spawns at the given level: shrinks with the
    /// level down to a floor.
    pub fn enemy_spawn_interval_ms(level: u32) -> u64 {
        BASE_ENEMY_SPAWN_INTERVAL_MS
            .saturating_sub(ENEMY_SPAWN_INTERVAL_STEP_MS * u64::from(level))
            .max(MIN_ENEMY_SPAWN_INTERVAL_MS)
    }

    /// Run spawn checks for this tick.
    pub fn run(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        ids: &mut IdAllocator,
        clock: &SimClock,
        level: u32,
    ) {
        self.spawn_enemy(world, rng, ids, clock, level);
        self.spawn_ambient_power_up(world, rng, ids, clock);
    }

    /// Spawn one enemy whenever the level-scaled interval has elapsed.
    /// The boss joins the candidate list with a 10% roll once the level
    /// is high enough; the kind is then chosen uniformly.
    fn spawn_enemy(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        ids: &mut IdAllocator,
        clock: &SimClock,
        level: u32,
    ) {
        if clock.now_ms - self.last_enemy_spawn_ms <= Self::enemy_spawn_interval_ms(level) {
            return;
        }

        let mut candidates = vec![EnemyKind::Asteroid, EnemyKind::Fighter, EnemyKind::Bomber];
        if level >= BOSS_MIN_LEVEL && rng.gen_bool(BOSS_CANDIDATE_CHANCE) {
            candidates.push(EnemyKind::Boss);
        }
        let kind = candidates[rng.gen_range(0..candidates.len())];

        world_setup::spawn_enemy(world, rng, ids, kind, level);
        self.last_enemy_spawn_ms = clock.now_ms;
    }

    /// Ambient power-up drop at a random x along the top edge.
    fn spawn_ambient_power_up(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        ids: &mut IdAllocator,
        clock: &SimClock,
    ) {
        if clock.now_ms - self.last_power_up_spawn_ms <= AMBIENT_POWER_UP_INTERVAL_MS {
            return;
        }

        let kind = world_setup::random_power_up_kind(rng);
        let x = rng.gen_range(0.0..ARENA_WIDTH - 30.0);
        world_setup::spawn_power_up(world, ids, kind, Position::new(x, -30.0));
        self.last_power_up_spawn_ms = clock.now_ms;
    }
}
