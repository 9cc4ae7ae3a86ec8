//! Simulation engine for the strafe shooter.
//!
//! Owns the hecs ECS world, runs the per-tick systems in a fixed order,
//! and returns an ordered batch of observable events each tick.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use strafe_core as core;
