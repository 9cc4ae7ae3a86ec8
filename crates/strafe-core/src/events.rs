//! Observable events returned by the engine, one ordered batch per tick.
//!
//! The renderer consumes these to update visuals; it never reaches into the
//! entity registry directly.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::types::Position;

/// Everything a host can observe happening during one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// An enemy entered the simulation just off the right edge.
    EnemySpawned { id: u32, pos: Position },
    /// The player fired; a projectile now exists at the muzzle position.
    ProjectileSpawned { id: u32, pos: Position },
    /// A registry entity was removed (bounds exit or collision).
    EntityDestroyed { id: u32, kind: EntityKind },
    /// An explosion visual should play at this position.
    ExplosionTriggered { pos: Position },
    /// The delayed death transition fired; the session is now GameOver.
    PlayerDied { elapsed_ms: u64 },
    /// A fresh session started (initial start or replay).
    SessionReset,
}
