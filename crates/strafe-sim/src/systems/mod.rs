//! Per-tick systems, one per simulation concern.
//!
//! The engine runs them in a fixed order each tick:
//! spawner → movement → bounds → collision → explosion lifetimes.
//! Systems are free functions over `&mut World`; they do not own state
//! beyond what the engine passes in.

pub mod bounds;
pub mod collision;
pub mod explosion;
pub mod movement;
pub mod snapshot;
pub mod spawner;
