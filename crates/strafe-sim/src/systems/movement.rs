//! Movement controller: input steering, kinematic integration, player clamp.

use hecs::World;

use strafe_core::components::Player;
use strafe_core::input::InputSnapshot;
use strafe_core::types::{Playfield, Position, Velocity};

/// Set the player's velocity from the current input snapshot.
///
/// Left/right and up/down are mutually exclusive per axis (left and up win);
/// both axes may be nonzero at once for diagonal movement.
pub fn apply_input(world: &mut World, input: &InputSnapshot, player_speed: f64) {
    for (_entity, (vel, _player)) in world.query_mut::<(&mut Velocity, &Player)>() {
        vel.0.x = if input.left {
            -player_speed
        } else if input.right {
            player_speed
        } else {
            0.0
        };
        vel.0.y = if input.up {
            -player_speed
        } else if input.down {
            player_speed
        } else {
            0.0
        };
    }
}

/// Kinematic integration: position += velocity * dt for every moving entity.
pub fn run(world: &mut World, dt_ms: f64) {
    let dt = dt_ms / 1000.0;
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * dt;
    }
}

/// Clamp the player inside the playfield. The velocity component is left
/// untouched (collide-with-world-bounds semantics).
pub fn clamp_player(world: &mut World, playfield: &Playfield) {
    for (_entity, (pos, _player)) in world.query_mut::<(&mut Position, &Player)>() {
        pos.0 = playfield.clamp(pos.0);
    }
}
