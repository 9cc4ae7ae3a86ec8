//! Session snapshot — the complete render-facing state, rebuilt on demand.

use serde::{Deserialize, Serialize};

use crate::enums::SessionPhase;
use crate::types::{Position, Rect, Velocity};

/// Everything a host needs to draw one frame and the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    /// Elapsed session time in ms; frozen at time of death once the player
    /// is hit.
    pub elapsed_ms: u64,
    /// `HH:MM:SS` for the HUD timer.
    pub elapsed_display: String,
    pub playfield_width: f64,
    pub playfield_height: f64,
    /// Absent between the player-enemy collision and replay.
    pub player: Option<EntityView>,
    pub projectiles: Vec<EntityView>,
    pub enemies: Vec<EntityView>,
    pub explosions: Vec<ExplosionView>,
}

/// A live registry entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub position: Position,
    pub velocity: Velocity,
    /// Collision footprint rectangle at the current position.
    pub footprint: Rect,
}

/// An in-flight explosion visual.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Position,
    pub remaining_ms: f64,
}
