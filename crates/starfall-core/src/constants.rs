//! Simulation constants and tuning parameters.

// --- Arena ---

/// Arena width in world units.
pub const ARENA_WIDTH: f32 = 800.0;

/// Arena height in world units. Y grows downward.
pub const ARENA_HEIGHT: f32 = 600.0;

// --- Player ---

/// Player hull width.
pub const PLAYER_WIDTH: f32 = 60.0;

/// Player hull height.
pub const PLAYER_HEIGHT: f32 = 40.0;

/// Fixed vertical position of the player (top of the hull).
pub const PLAYER_START_Y: f32 = ARENA_HEIGHT - 80.0;

/// Horizontal movement per tick while a move intent is held.
pub const PLAYER_SPEED: f32 = 7.0;

/// Starting and maximum hull integrity.
pub const PLAYER_MAX_HEALTH: u32 = 100;

/// Effective collision radius of the player hull.
pub const PLAYER_RADIUS: f32 = PLAYER_WIDTH / 3.0;

// --- Bullets ---

/// Player bullet speed, arena units per tick (upward).
pub const BULLET_SPEED: f32 = 12.0;

/// Enemy bullet speed, arena units per tick (downward).
pub const ENEMY_BULLET_SPEED: f32 = 6.0;

/// Effective radius of a player bullet against enemies.
pub const BULLET_RADIUS: f32 = 8.0;

/// Effective radius of an enemy bullet against the player.
pub const ENEMY_BULLET_RADIUS: f32 = 5.0;

// --- Player guns ---

/// Minimum interval between player shots (ms).
pub const FIRE_INTERVAL_MS: u64 = 150;

/// Minimum interval between player shots while rapid-fire is active (ms).
pub const RAPID_FIRE_INTERVAL_MS: u64 = 100;

/// Damage of a normal bullet.
pub const NORMAL_DAMAGE: u32 = 1;

/// Damage of a laser bullet.
pub const LASER_DAMAGE: u32 = 3;

// --- Special attack ---

/// Number of plasma bullets in the special attack beam.
pub const SPECIAL_BEAM_BULLETS: u32 = 15;

/// Horizontal spacing between beam bullets.
pub const SPECIAL_BEAM_SPACING: f32 = 4.0;

/// Damage of each plasma bullet.
pub const SPECIAL_BULLET_DAMAGE: u32 = 8;

/// Plasma bullet speed.
pub const SPECIAL_BULLET_SPEED: f32 = BULLET_SPEED * 2.0;

/// Cooldown armed after every special attack (ms).
pub const SPECIAL_ATTACK_COOLDOWN_MS: u32 = 5000;

// --- Timed effects ---

/// Rapid-fire effect duration (ms).
pub const RAPID_FIRE_DURATION_MS: u32 = 8000;

/// Shield effect duration (ms).
pub const SHIELD_DURATION_MS: u32 = 10_000;

/// Multi-shot effect duration (ms).
pub const MULTI_SHOT_DURATION_MS: u32 = 12_000;

/// Laser weapon effect duration (ms).
pub const LASER_DURATION_MS: u32 = 15_000;

// --- Power-ups ---

/// Hull restored by a health pickup, capped at `PLAYER_MAX_HEALTH`.
pub const HEALTH_PICKUP_AMOUNT: u32 = 30;

/// Power-up descent per tick.
pub const POWER_UP_FALL_SPEED: f32 = 2.0;

/// Pickup radius around the power-up center.
pub const POWER_UP_PICKUP_RADIUS: f32 = 25.0;

/// Half-extent of a power-up; its center is offset by this from its position.
pub const POWER_UP_HALF_SIZE: f32 = 15.0;

// --- Spawning ---

/// Enemy spawn interval at level 0 (ms).
pub const BASE_ENEMY_SPAWN_INTERVAL_MS: u64 = 800;

/// Spawn interval reduction per level (ms).
pub const ENEMY_SPAWN_INTERVAL_STEP_MS: u64 = 50;

/// Spawn interval floor (ms).
pub const MIN_ENEMY_SPAWN_INTERVAL_MS: u64 = 300;

/// Interval between ambient power-up spawns at the top of the arena (ms).
pub const AMBIENT_POWER_UP_INTERVAL_MS: u64 = 15_000;

/// Probability that a destroyed enemy drops a power-up.
pub const POWER_UP_DROP_CHANCE: f64 = 0.3;

/// Probability that the boss joins the spawn candidate list.
pub const BOSS_CANDIDATE_CHANCE: f64 = 0.1;

/// Minimum level at which the boss may spawn.
pub const BOSS_MIN_LEVEL: u32 = 5;

// --- Enemy guns ---

/// Fighter shot interval (ms).
pub const FIGHTER_SHOOT_COOLDOWN_MS: u64 = 1500;

/// Bomber spread interval (ms).
pub const BOMBER_SHOOT_COOLDOWN_MS: u64 = 2000;

/// Boss fan interval (ms).
pub const BOSS_SHOOT_COOLDOWN_MS: u64 = 800;

/// Fighter bullet damage.
pub const FIGHTER_BULLET_DAMAGE: u32 = 15;

/// Bomber bullet damage.
pub const BOMBER_BULLET_DAMAGE: u32 = 20;

/// Boss bullet damage.
pub const BOSS_BULLET_DAMAGE: u32 = 25;

/// Horizontal offset of the bomber's outer spread bullets.
pub const BOMBER_SPREAD_OFFSET: f32 = 10.0;

/// Number of bullets in the boss fan.
pub const BOSS_FAN_BULLETS: u32 = 5;

/// Upper bound of the random speed jitter on boss bullets.
pub const BOSS_BULLET_SPEED_JITTER: f32 = 2.0;

// --- Enemy movement ---

/// Fighter horizontal zigzag speed per tick.
pub const FIGHTER_STRAFE_SPEED: f32 = 2.0;

/// Boss horizontal sweep speed per tick.
pub const BOSS_STRAFE_SPEED: f32 = 1.0;

/// Vertical step the boss drops on each edge bounce.
pub const BOSS_EDGE_DROP: f32 = 20.0;

/// Contact damage dealt by any enemy overlapping the player.
pub const ENEMY_RAM_DAMAGE: u32 = 30;

// --- Scoring ---

/// Score for destroying an asteroid.
pub const SCORE_ASTEROID: u32 = 10;

/// Score for destroying a fighter.
pub const SCORE_FIGHTER: u32 = 25;

/// Score for destroying a bomber.
pub const SCORE_BOMBER: u32 = 50;

/// Score for destroying a boss.
pub const SCORE_BOSS: u32 = 200;

/// Score per level: level = score / SCORE_PER_LEVEL + 1.
pub const SCORE_PER_LEVEL: u32 = 500;

// --- Despawn margins (beyond the arena edge) ---

/// Bullets despawn this far past the top or bottom edge.
pub const BULLET_DESPAWN_MARGIN: f32 = 10.0;

/// Enemies despawn this far past the bottom edge.
pub const ENEMY_DESPAWN_MARGIN: f32 = 100.0;

/// Power-ups despawn this far past the bottom edge.
pub const POWER_UP_DESPAWN_MARGIN: f32 = 50.0;

// --- Particles ---

/// Particle lifetime in ticks.
pub const PARTICLE_LIFE_TICKS: u32 = 30;

/// Per-tick velocity decay factor for particles.
pub const PARTICLE_DRAG: f32 = 0.98;

/// Particles emitted when a bullet hits an enemy.
pub const ENEMY_HIT_PARTICLES: u32 = 4;

/// Particles emitted when an enemy is destroyed.
pub const EXPLOSION_PARTICLES: u32 = 12;

/// Particles emitted when an enemy rams the player.
pub const PLAYER_RAM_PARTICLES: u32 = 8;

/// Particles emitted when an enemy bullet hits the player.
pub const PLAYER_BULLET_HIT_PARTICLES: u32 = 6;

/// Particles emitted when a power-up is collected.
pub const PICKUP_PARTICLES: u32 = 8;

/// Particles emitted when the special attack charges.
pub const SPECIAL_CHARGE_PARTICLES: u32 = 25;
