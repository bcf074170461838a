//! Simulation engine for STARFALL.
//!
//! Owns the hecs ECS world, advances it by one `step` per display frame,
//! and produces `WorldSnapshot`s for the renderer. Completely headless
//! (no rendering or input dependency), enabling deterministic testing.

pub mod engine;
pub mod session;
pub mod systems;
pub mod timers;
pub mod world_setup;

pub use engine::{GameEngine, SimConfig};
pub use starfall_core as core;
