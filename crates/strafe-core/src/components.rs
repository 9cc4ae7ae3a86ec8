//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::types::{Position, Rect};

/// Marks the player entity. Exactly one exists while the session is Playing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks a player-fired projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks a short-lived explosion visual spawned at a collision point.
/// FX entities never participate in movement, bounds, or collision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExplosionFx;

/// Renderer-stable entity identifier, carried in events and snapshots so the
/// host never needs raw `hecs::Entity` handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Collision footprint: an AABB of this size centered on the entity position.
/// Usually shrunk from the visual sprite size (the overlap test never uses
/// the full visual rectangle).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Footprint {
    pub size: DVec2,
}

impl Footprint {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
        }
    }

    /// The footprint rectangle at the given position.
    pub fn rect(&self, pos: Position) -> Rect {
        Rect::from_center(pos.0, self.size)
    }
}

/// World-bounds destruction flag for projectiles and enemies.
///
/// `entered` latches once the footprint has overlapped the playfield;
/// only entities that have entered are destroyed on exit. Enemies spawn
/// off-screen right and must not be culled before they arrive.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WorldBound {
    pub entered: bool,
}

/// Remaining lifetime for timed visuals (explosion FX).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining_ms: f64,
}
