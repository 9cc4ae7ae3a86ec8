//! Periodic enemy spawning.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use strafe_core::config::SimConfig;
use strafe_core::events::SimEvent;
use strafe_core::types::Playfield;

use crate::world_setup;

/// Accumulates active (Playing) time and fires once per full interval.
///
/// A single oversized dt produces exactly one spawn: the accumulator resets
/// to zero instead of carrying the overshoot, one spawn per timer firing.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: f64,
    accumulated_ms: f64,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            accumulated_ms: 0.0,
        }
    }

    /// Advance the accumulator; true when a spawn is due.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.accumulated_ms += dt_ms;
        if self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }
}

/// Advance the timer and spawn one enemy when it fires.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    playfield: &Playfield,
    config: &SimConfig,
    id_counter: &mut u32,
    dt_ms: f64,
    events: &mut Vec<SimEvent>,
) {
    if timer.advance(dt_ms) {
        let (id, pos) = world_setup::spawn_enemy(world, rng, playfield, config, id_counter);
        log::debug!("enemy {id} spawned at ({:.1}, {:.1})", pos.x(), pos.y());
        events.push(SimEvent::EnemySpawned { id, pos });
    }
}
