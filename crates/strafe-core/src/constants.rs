//! Simulation constants and tuning defaults.
//!
//! Values follow the game's tuning: constant-speed axis-aligned
//! steps, a 5 second spawn period, and collision boxes shrunk from the
//! visual sprites.

// --- Playfield ---

/// Default playfield width in pixels.
pub const DEFAULT_PLAYFIELD_WIDTH: f64 = 800.0;

/// Default playfield height in pixels.
pub const DEFAULT_PLAYFIELD_HEIGHT: f64 = 600.0;

// --- Player ---

/// Player speed per axis (px/s). Velocity components are always
/// -PLAYER_SPEED, 0, or +PLAYER_SPEED.
pub const PLAYER_SPEED: f64 = 200.0;

/// Initial player spawn position.
pub const PLAYER_SPAWN_X: f64 = 50.0;
pub const PLAYER_SPAWN_Y: f64 = 50.0;

/// Player sprite edge in source pixels.
pub const PLAYER_SPRITE_PX: f64 = 256.0;

/// Player visual scale factor.
pub const PLAYER_SCALE: f64 = 0.23;

/// Player visual size (and collision footprint — the player box is not
/// shrunk).
pub const PLAYER_VISUAL_PX: f64 = PLAYER_SPRITE_PX * PLAYER_SCALE;

// --- Projectiles ---

/// Projectile speed, rightward only (px/s).
pub const PROJECTILE_SPEED: f64 = 400.0;

/// Maximum simultaneously live projectiles. A fire request at the cap is
/// rejected silently.
pub const MAX_ACTIVE_PROJECTILES: usize = 3;

/// Projectile sprite size in source pixels.
pub const PROJECTILE_SPRITE_W_PX: f64 = 320.0;
pub const PROJECTILE_SPRITE_H_PX: f64 = 96.0;

/// Projectile visual scale factor.
pub const PROJECTILE_SCALE: f64 = 0.1;

/// Projectile visual size.
pub const PROJECTILE_VISUAL_W_PX: f64 = PROJECTILE_SPRITE_W_PX * PROJECTILE_SCALE;
pub const PROJECTILE_VISUAL_H_PX: f64 = PROJECTILE_SPRITE_H_PX * PROJECTILE_SCALE;

/// Projectile collision box: 80% of visual width, 40% of visual height,
/// kept vertically centered.
pub const PROJECTILE_COLLISION_SHRINK_X: f64 = 0.8;
pub const PROJECTILE_COLLISION_SHRINK_Y: f64 = 0.4;

// --- Enemies ---

/// Enemy speed, leftward (px/s).
pub const ENEMY_SPEED: f64 = 100.0;

/// Enemy sprite edge in source pixels.
pub const ENEMY_SPRITE_PX: f64 = 256.0;

/// Enemy visual scale factor.
pub const ENEMY_SCALE: f64 = 0.08;

/// Enemy visual size.
pub const ENEMY_VISUAL_PX: f64 = ENEMY_SPRITE_PX * ENEMY_SCALE;

/// Enemy collision box: 60% of visual size on both axes, re-centered.
pub const ENEMY_COLLISION_SHRINK: f64 = 0.6;

// --- Spawning ---

/// Period between enemy spawns (ms of active Playing time).
pub const SPAWN_INTERVAL_MS: f64 = 5000.0;

/// Enemies spawn this far past the right edge.
pub const SPAWN_OFFSET_X: f64 = 50.0;

/// Vertical margin for the spawn band: y is uniform in
/// [SPAWN_MARGIN_Y, height - SPAWN_MARGIN_Y].
pub const SPAWN_MARGIN_Y: f64 = 50.0;

// --- Timers ---

/// Lifetime of an explosion visual (ms).
pub const EXPLOSION_LIFETIME_MS: f64 = 300.0;

/// Delay between the player-enemy collision and the GameOver transition (ms).
pub const PLAYER_DEATH_DELAY_MS: f64 = 300.0;
