//! Builds the render-facing session snapshot from the world.

use hecs::World;

use strafe_core::components::{
    Enemy, EntityId, ExplosionFx, Footprint, Lifetime, Player, Projectile,
};
use strafe_core::enums::SessionPhase;
use strafe_core::state::{EntityView, ExplosionView, SessionSnapshot};
use strafe_core::types::{Playfield, Position, Velocity};

fn view(id: &EntityId, pos: &Position, vel: &Velocity, fp: &Footprint) -> EntityView {
    EntityView {
        id: id.0,
        position: *pos,
        velocity: *vel,
        footprint: fp.rect(*pos),
    }
}

pub fn build(
    world: &World,
    playfield: &Playfield,
    phase: SessionPhase,
    elapsed_ms: u64,
    elapsed_display: String,
) -> SessionSnapshot {
    let player = world
        .query::<(&EntityId, &Position, &Velocity, &Footprint, &Player)>()
        .iter()
        .next()
        .map(|(_, (id, pos, vel, fp, _))| view(id, pos, vel, fp));

    let projectiles = world
        .query::<(&EntityId, &Position, &Velocity, &Footprint, &Projectile)>()
        .iter()
        .map(|(_, (id, pos, vel, fp, _))| view(id, pos, vel, fp))
        .collect();

    let enemies = world
        .query::<(&EntityId, &Position, &Velocity, &Footprint, &Enemy)>()
        .iter()
        .map(|(_, (id, pos, vel, fp, _))| view(id, pos, vel, fp))
        .collect();

    let explosions = world
        .query::<(&Position, &Lifetime, &ExplosionFx)>()
        .iter()
        .map(|(_, (pos, life, _))| ExplosionView {
            position: *pos,
            remaining_ms: life.remaining_ms,
        })
        .collect();

    SessionSnapshot {
        phase,
        elapsed_ms,
        elapsed_display,
        playfield_width: playfield.width,
        playfield_height: playfield.height,
        player,
        projectiles,
        enemies,
        explosions,
    }
}
