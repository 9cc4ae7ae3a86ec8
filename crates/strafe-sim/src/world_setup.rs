//! Entity spawn factories.
//!
//! Creates the player, enemies, projectiles, and explosion visuals with
//! their component bundles. All footprints are computed here, at spawn —
//! velocities and collision boxes never change afterwards.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use strafe_core::components::*;
use strafe_core::config::SimConfig;
use strafe_core::constants::*;
use strafe_core::types::{Playfield, Position, Velocity};

fn next_id(counter: &mut u32) -> u32 {
    let id = *counter;
    *counter += 1;
    id
}

/// Spawn the player at its initial position with zero velocity.
pub fn spawn_player(world: &mut World, id_counter: &mut u32) -> (u32, Position) {
    let id = next_id(id_counter);
    let pos = Position::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
    world.spawn((
        Player,
        EntityId(id),
        pos,
        Velocity::default(),
        Footprint::new(PLAYER_VISUAL_PX, PLAYER_VISUAL_PX),
    ));
    (id, pos)
}

/// Spawn one enemy just off the right edge, at a uniform random height
/// inside the spawn band, moving left at the configured speed.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    playfield: &Playfield,
    config: &SimConfig,
    id_counter: &mut u32,
) -> (u32, Position) {
    let x = playfield.width + SPAWN_OFFSET_X;
    // The band collapses to a point when the field is shorter than both
    // margins; gen_range rejects an empty range.
    let hi = (playfield.height - SPAWN_MARGIN_Y).max(SPAWN_MARGIN_Y);
    let y = rng.gen_range(SPAWN_MARGIN_Y..=hi);
    spawn_enemy_at(world, config, id_counter, Position::new(x, y))
}

/// Spawn an enemy at an explicit position (the spawner draws the position;
/// tests place enemies directly).
pub fn spawn_enemy_at(
    world: &mut World,
    config: &SimConfig,
    id_counter: &mut u32,
    pos: Position,
) -> (u32, Position) {
    let id = next_id(id_counter);
    let side = ENEMY_VISUAL_PX * config.enemy_collision_shrink;
    world.spawn((
        Enemy,
        EntityId(id),
        pos,
        Velocity::new(-config.enemy_speed, 0.0),
        Footprint::new(side, side),
        WorldBound::default(),
    ));
    (id, pos)
}

/// Spawn a projectile at the muzzle position, moving right.
pub fn spawn_projectile(
    world: &mut World,
    config: &SimConfig,
    id_counter: &mut u32,
    pos: Position,
) -> (u32, Position) {
    let id = next_id(id_counter);
    world.spawn((
        Projectile,
        EntityId(id),
        pos,
        Velocity::new(config.projectile_speed, 0.0),
        Footprint::new(
            PROJECTILE_VISUAL_W_PX * config.projectile_collision_shrink_x,
            PROJECTILE_VISUAL_H_PX * config.projectile_collision_shrink_y,
        ),
        WorldBound::default(),
    ));
    (id, pos)
}

/// Spawn an explosion visual. FX entities carry no footprint or world-bounds
/// flag; the lifetime system removes them silently.
pub fn spawn_explosion(world: &mut World, pos: Position) {
    world.spawn((
        ExplosionFx,
        pos,
        Lifetime {
            remaining_ms: EXPLOSION_LIFETIME_MS,
        },
    ));
}
