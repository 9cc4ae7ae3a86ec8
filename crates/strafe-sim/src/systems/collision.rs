//! Collision detector: AABB overlap resolution on collision footprints.
//!
//! Projectile-enemy overlaps destroy both and trigger one explosion at the
//! enemy; a player-enemy overlap triggers an explosion at the player and
//! destroys both. Entities destroyed mid-resolution are skipped by every
//! later rule within the same tick, and the final despawn discards errors,
//! so double-destroy is a silent no-op.

use hecs::{Entity, World};

use strafe_core::components::{Enemy, EntityId, Footprint, Player, Projectile};
use strafe_core::enums::EntityKind;
use strafe_core::events::SimEvent;
use strafe_core::types::{Position, Rect};

use crate::world_setup;

/// Resolve all overlaps for this tick. Returns the player's position if an
/// enemy hit it (the engine schedules the delayed death transition).
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) -> Option<Position> {
    despawn_buffer.clear();

    let projectiles: Vec<(Entity, u32, Rect)> = world
        .query_mut::<(&EntityId, &Position, &Footprint, &Projectile)>()
        .into_iter()
        .map(|(e, (id, pos, fp, _))| (e, id.0, fp.rect(*pos)))
        .collect();
    let enemies: Vec<(Entity, u32, Rect, Position)> = world
        .query_mut::<(&EntityId, &Position, &Footprint, &Enemy)>()
        .into_iter()
        .map(|(e, (id, pos, fp, _))| (e, id.0, fp.rect(*pos), *pos))
        .collect();

    let mut projectile_dead = vec![false; projectiles.len()];
    let mut enemy_dead = vec![false; enemies.len()];
    let mut explosions: Vec<Position> = Vec::new();

    // Projectile × enemy: both destroyed, one explosion per pair.
    for (pi, (pe, pid, prect)) in projectiles.iter().enumerate() {
        for (ei, (ee, eid, erect, epos)) in enemies.iter().enumerate() {
            if projectile_dead[pi] || enemy_dead[ei] {
                continue;
            }
            if prect.intersects(erect) {
                projectile_dead[pi] = true;
                enemy_dead[ei] = true;
                explosions.push(*epos);
                events.push(SimEvent::ExplosionTriggered { pos: *epos });
                events.push(SimEvent::EntityDestroyed {
                    id: *pid,
                    kind: EntityKind::Projectile,
                });
                events.push(SimEvent::EntityDestroyed {
                    id: *eid,
                    kind: EntityKind::Enemy,
                });
                despawn_buffer.push(*pe);
                despawn_buffer.push(*ee);
            }
        }
    }

    // Player × enemy: explosion at the player, both destroyed. The delayed
    // GameOver transition is the engine's job.
    let mut player_hit = None;
    let player: Option<(Entity, u32, Position, Rect)> = world
        .query_mut::<(&EntityId, &Position, &Footprint, &Player)>()
        .into_iter()
        .next()
        .map(|(e, (id, pos, fp, _))| (e, id.0, *pos, fp.rect(*pos)));
    if let Some((pe, pid, ppos, prect)) = player {
        for (ei, (ee, eid, erect, _epos)) in enemies.iter().enumerate() {
            if enemy_dead[ei] {
                continue;
            }
            if prect.intersects(erect) {
                enemy_dead[ei] = true;
                explosions.push(ppos);
                events.push(SimEvent::ExplosionTriggered { pos: ppos });
                events.push(SimEvent::EntityDestroyed {
                    id: pid,
                    kind: EntityKind::Player,
                });
                events.push(SimEvent::EntityDestroyed {
                    id: *eid,
                    kind: EntityKind::Enemy,
                });
                despawn_buffer.push(pe);
                despawn_buffer.push(*ee);
                player_hit = Some(ppos);
                break;
            }
        }
    }

    for pos in explosions {
        world_setup::spawn_explosion(world, pos);
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    player_hit
}
