//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tuning knobs for a simulation session.
///
/// One parameterized struct covers every session variant; the defaults give
/// the standard game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for the enemy spawn draw. Same seed = same session.
    pub seed: u64,
    /// Initial playfield bounds (the host may resize later).
    pub playfield_width: f64,
    pub playfield_height: f64,
    /// Live-projectile cap; fire requests beyond it are silently rejected.
    pub max_active_projectiles: usize,
    /// Enemy collision box as a fraction of its visual size (both axes).
    pub enemy_collision_shrink: f64,
    /// Projectile collision box fractions (width, height).
    pub projectile_collision_shrink_x: f64,
    pub projectile_collision_shrink_y: f64,
    /// Period between enemy spawns (ms of Playing time).
    pub spawn_interval_ms: f64,
    /// Player speed per axis (px/s).
    pub player_speed: f64,
    /// Projectile speed, rightward (px/s).
    pub projectile_speed: f64,
    /// Enemy speed, leftward (px/s).
    pub enemy_speed: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            playfield_height: DEFAULT_PLAYFIELD_HEIGHT,
            max_active_projectiles: MAX_ACTIVE_PROJECTILES,
            enemy_collision_shrink: ENEMY_COLLISION_SHRINK,
            projectile_collision_shrink_x: PROJECTILE_COLLISION_SHRINK_X,
            projectile_collision_shrink_y: PROJECTILE_COLLISION_SHRINK_Y,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            player_speed: PLAYER_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            enemy_speed: ENEMY_SPEED,
        }
    }
}
