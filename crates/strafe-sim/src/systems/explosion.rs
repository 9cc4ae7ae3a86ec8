//! Explosion FX lifetimes.

use hecs::{Entity, World};

use strafe_core::components::{ExplosionFx, Lifetime};

/// Age explosion visuals and remove the expired ones. Removal is silent:
/// FX entities are not registry entities and emit no destroy events.
pub fn run(world: &mut World, dt_ms: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (life, _fx)) in world.query_mut::<(&mut Lifetime, &ExplosionFx)>() {
        life.remaining_ms -= dt_ms;
        if life.remaining_ms <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
