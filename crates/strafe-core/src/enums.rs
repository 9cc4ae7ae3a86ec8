//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase (top-level state machine).
///
/// While `GameOver`, the simulation is frozen — no movement, spawning, or
/// collision updates — except for the replay trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Playing,
    GameOver,
}

/// The kind of registry entity an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Projectile,
    Enemy,
}
