//! Bounds checker: destroys projectiles and enemies that leave the playfield.
//!
//! Runs after movement and before collision, so collisions never evaluate
//! entities that already exited this tick. Uses a pre-allocated buffer to
//! avoid per-tick allocation.

use hecs::{Entity, World};

use strafe_core::components::{Enemy, EntityId, Footprint, Projectile, WorldBound};
use strafe_core::enums::EntityKind;
use strafe_core::events::SimEvent;
use strafe_core::types::{Playfield, Position, Rect};

/// Latch entry, then detect exit. Entities that spawn off-screen (enemies
/// arrive from past the right edge) are not culled before they have
/// overlapped the playfield once.
fn exited(field: &Rect, footprint: Rect, bound: &mut WorldBound) -> bool {
    if footprint.intersects(field) {
        bound.entered = true;
        return false;
    }
    bound.entered
}

pub fn run(
    world: &mut World,
    playfield: &Playfield,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();
    let field = playfield.rect();

    for (entity, (id, pos, fp, bound, _proj)) in
        world.query_mut::<(&EntityId, &Position, &Footprint, &mut WorldBound, &Projectile)>()
    {
        if exited(&field, fp.rect(*pos), bound) {
            despawn_buffer.push(entity);
            events.push(SimEvent::EntityDestroyed {
                id: id.0,
                kind: EntityKind::Projectile,
            });
        }
    }

    for (entity, (id, pos, fp, bound, _enemy)) in
        world.query_mut::<(&EntityId, &Position, &Footprint, &mut WorldBound, &Enemy)>()
    {
        if exited(&field, fp.rect(*pos), bound) {
            despawn_buffer.push(entity);
            events.push(SimEvent::EntityDestroyed {
                id: id.0,
                kind: EntityKind::Enemy,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
