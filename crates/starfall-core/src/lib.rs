//! Core types and definitions for the STARFALL simulation.
//!
//! This crate defines the vocabulary shared by the engine and any shell:
//! components, control intent, snapshot views, events, and constants.
//! It has no dependency on any rendering or input framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod intent;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
