//! Game engine — the state machine at the root of the simulation.
//!
//! `GameEngine` owns the hecs ECS world, consumes one `ControlIntent` per
//! display frame, runs all systems, and produces `WorldSnapshot`s.
//! Completely headless (no rendering or input dependency), enabling
//! deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::enums::GamePhase;
use starfall_core::events::GameEvent;
use starfall_core::intent::ControlIntent;
use starfall_core::state::WorldSnapshot;
use starfall_core::types::{IdAllocator, SimClock};

use crate::session::SessionState;
use crate::systems;
use crate::systems::spawner::SpawnDirector;
use crate::timers::TimerBank;
use crate::world_setup;

/// Configuration for a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same intents = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct GameEngine {
    world: World,
    clock: SimClock,
    phase: GamePhase,
    rng: ChaCha8Rng,
    ids: IdAllocator,
    timers: TimerBank,
    spawner: SpawnDirector,
    session: SessionState,
    last_player_shot_ms: Option<u64>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new engine in the menu state.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            clock: SimClock::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ids: IdAllocator::default(),
            timers: TimerBank::default(),
            spawner: SpawnDirector::default(),
            session: SessionState::default(),
            last_player_shot_ms: None,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Start a new game, reinitializing the world, timers, and session.
    /// Valid from the menu, from GameOver (restart), or mid-game.
    pub fn new_game(&mut self) {
        self.world.clear();
        self.clock = SimClock::default();
        self.ids = IdAllocator::default();
        self.timers = TimerBank::default();
        self.spawner = SpawnDirector::default();
        self.session = SessionState::default();
        self.last_player_shot_ms = None;
        self.events.clear();
        world_setup::spawn_player(&mut self.world, &mut self.ids);
        self.phase = GamePhase::Playing;
    }

    /// Discard the world and return to the menu state.
    pub fn reset(&mut self) {
        self.world.clear();
        self.clock = SimClock::default();
        self.timers = TimerBank::default();
        self.spawner = SpawnDirector::default();
        self.session = SessionState::default();
        self.last_player_shot_ms = None;
        self.events.clear();
        self.phase = GamePhase::NotStarted;
    }

    /// Freeze the simulation. Only valid while playing.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
        }
    }

    /// Resume a paused simulation.
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
        }
    }

    /// Advance the simulation by one frame of `dt_ms` elapsed time and
    /// return the resulting snapshot. While paused (or before/after a
    /// game), nothing advances and the snapshot reflects the frozen world.
    pub fn step(&mut self, dt_ms: u32, intent: &ControlIntent) -> WorldSnapshot {
        if intent.toggle_pause {
            match self.phase {
                GamePhase::Playing => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Playing,
                _ => {}
            }
        }

        if self.phase == GamePhase::Playing {
            self.clock.advance(dt_ms);
            self.timers.tick(dt_ms);
            self.run_systems(intent);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.clock,
            self.phase,
            &self.session,
            &self.timers,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation clock.
    pub fn clock(&self) -> SimClock {
        self.clock
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.session.score
    }

    /// Get the current level.
    pub fn level(&self) -> u32 {
        self.session.level
    }

    /// Get the player's current health.
    pub fn health(&self) -> u32 {
        self.session.health
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable timer bank access for test setups.
    #[cfg(test)]
    pub fn timers_mut(&mut self) -> &mut TimerBank {
        &mut self.timers
    }

    /// Mutable session access for test setups.
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// Spawn an enemy at a precise location (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        enemy: starfall_core::components::Enemy,
        x: f32,
        y: f32,
    ) -> hecs::Entity {
        self.world
            .spawn((self.ids.allocate(), enemy, starfall_core::types::Position::new(x, y)))
    }

    /// Spawn a player bullet at a precise location (for tests).
    #[cfg(test)]
    pub fn spawn_test_bullet(&mut self, x: f32, y: f32, damage: u32) -> hecs::Entity {
        use starfall_core::components::Bullet;
        use starfall_core::enums::WeaponKind;
        self.world.spawn((
            self.ids.allocate(),
            Bullet {
                speed: starfall_core::constants::BULLET_SPEED,
                damage,
                kind: WeaponKind::Normal,
            },
            starfall_core::types::Position::new(x, y),
        ))
    }

    /// Spawn an enemy bullet at a precise location (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy_bullet(&mut self, x: f32, y: f32, damage: u32) -> hecs::Entity {
        use starfall_core::components::EnemyBullet;
        self.world.spawn((
            self.ids.allocate(),
            EnemyBullet {
                speed: starfall_core::constants::ENEMY_BULLET_SPEED,
                damage,
            },
            starfall_core::types::Position::new(x, y),
        ))
    }

    /// Spawn a power-up at a precise location (for tests).
    #[cfg(test)]
    pub fn spawn_test_power_up(
        &mut self,
        kind: starfall_core::enums::PowerUpKind,
        x: f32,
        y: f32,
    ) -> hecs::Entity {
        world_setup::spawn_power_up(
            &mut self.world,
            &mut self.ids,
            kind,
            starfall_core::types::Position::new(x, y),
        )
    }

    /// Run all systems in order for one playing tick.
    fn run_systems(&mut self, intent: &ControlIntent) {
        // 1. Motion and fire triggers (player guns, special attack, enemy guns).
        systems::motion::run(
            &mut self.world,
            &mut self.rng,
            &mut self.ids,
            &self.clock,
            &mut self.timers,
            intent,
            &mut self.last_player_shot_ms,
            &mut self.events,
        );
        // 2. Spawning (enemies, ambient power-ups).
        self.spawner.run(
            &mut self.world,
            &mut self.rng,
            &mut self.ids,
            &self.clock,
            self.session.level,
        );
        // 3. Collision resolution (score/health/effect deltas).
        systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &mut self.ids,
            &mut self.timers,
            &mut self.session,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 4. Terminal condition. Fires at most once: the phase check stops
        //    ticking, so a dead session is never stepped again.
        if self.session.health == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.session.score,
                level: self.session.level,
            });
        }
        // 5. Cleanup (off-arena, expired).
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
