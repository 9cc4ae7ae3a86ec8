//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, consumes one input snapshot
//! per tick, runs all systems in a fixed order, and returns the tick's
//! observable events. Completely headless (no rendering or windowing
//! dependency), enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use strafe_core::components::{Player, Projectile};
use strafe_core::config::SimConfig;
use strafe_core::constants::{PLAYER_DEATH_DELAY_MS, PLAYER_VISUAL_PX};
use strafe_core::enums::SessionPhase;
use strafe_core::error::SimError;
use strafe_core::events::SimEvent;
use strafe_core::input::InputSnapshot;
use strafe_core::state::SessionSnapshot;
use strafe_core::types::{format_elapsed, Playfield, Position, SessionClock};

use crate::systems;
use crate::systems::spawner::SpawnTimer;
use crate::world_setup;

/// Pending death-to-GameOver transition. Scheduled on the collision tick,
/// counted down on subsequent ticks so the full delay elapses from the
/// moment it was scheduled.
#[derive(Debug, Clone, Copy)]
struct DeathTimer {
    remaining_ms: f64,
    /// Session time at the moment of the collision; `PlayerDied` carries it.
    elapsed_at_death_ms: u64,
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    playfield: Playfield,
    clock: SessionClock,
    /// Monotonic driver time, accumulated from `advance(dt_ms)`.
    now_ms: f64,
    phase: SessionPhase,
    started: bool,
    rng: ChaCha8Rng,
    next_entity_id: u32,
    spawn_timer: SpawnTimer,
    death_timer: Option<DeathTimer>,
    /// Set at the moment of death; the HUD clock freezes here.
    frozen_elapsed_ms: Option<u64>,
    events: Vec<SimEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create an engine. No session is running yet; call `request_replay`
    /// before the first `advance`.
    pub fn new(config: SimConfig) -> Self {
        let playfield = Playfield::new(config.playfield_width, config.playfield_height);
        let spawn_timer = SpawnTimer::new(config.spawn_interval_ms);
        Self {
            world: World::new(),
            playfield,
            clock: SessionClock::default(),
            now_ms: 0.0,
            phase: SessionPhase::Playing,
            started: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_entity_id: 0,
            spawn_timer,
            death_timer: None,
            frozen_elapsed_ms: None,
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            config,
        }
    }

    /// Start a session. This is both the initial session-start trigger and
    /// the GameOver replay button: it fully resets the clock, the spawn
    /// accumulator, and the world (cancelling any pending explosion and
    /// death timers), then seeds a fresh player. A no-op while Playing.
    pub fn request_replay(&mut self) {
        if self.started && self.phase == SessionPhase::Playing {
            return;
        }
        self.start_session();
    }

    /// Advance the simulation by one tick and return its events.
    ///
    /// While GameOver the simulation is frozen: no movement, spawning, or
    /// collision updates happen until `request_replay`.
    pub fn advance(
        &mut self,
        dt_ms: f64,
        input: &InputSnapshot,
    ) -> Result<Vec<SimEvent>, SimError> {
        if !self.started {
            return Err(SimError::SessionNotStarted);
        }

        if self.phase == SessionPhase::GameOver {
            return Ok(std::mem::take(&mut self.events));
        }

        self.now_ms += dt_ms;
        self.clock.tick(self.now_ms);
        self.run_systems(dt_ms, input);

        Ok(std::mem::take(&mut self.events))
    }

    /// New playfield bounds from the host (window resize).
    pub fn resize(&mut self, width: f64, height: f64) {
        self.playfield = Playfield::new(width, height);
    }

    /// Current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Elapsed session time in ms; frozen at time of death.
    pub fn elapsed_ms(&self) -> u64 {
        self.frozen_elapsed_ms
            .unwrap_or_else(|| self.clock.elapsed_ms())
    }

    /// `HH:MM:SS` for the HUD timer.
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed_ms())
    }

    /// Build the render-facing snapshot of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        systems::snapshot::build(
            &self.world,
            &self.playfield,
            self.phase,
            self.elapsed_ms(),
            self.elapsed_display(),
        )
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Place an enemy at an exact position (for scenario tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, x: f64, y: f64) -> u32 {
        let (id, _) = world_setup::spawn_enemy_at(
            &mut self.world,
            &self.config,
            &mut self.next_entity_id,
            Position::new(x, y),
        );
        id
    }

    /// Place a projectile at an exact position (for scenario tests).
    #[cfg(test)]
    pub fn spawn_projectile_at(&mut self, x: f64, y: f64) -> u32 {
        let (id, _) = world_setup::spawn_projectile(
            &mut self.world,
            &self.config,
            &mut self.next_entity_id,
            Position::new(x, y),
        );
        id
    }

    fn start_session(&mut self) {
        self.world.clear();
        self.clock.reset();
        self.spawn_timer.reset();
        self.death_timer = None;
        self.frozen_elapsed_ms = None;
        self.events.clear();
        self.phase = SessionPhase::Playing;
        self.started = true;

        let (id, pos) =
            world_setup::spawn_player(&mut self.world, &mut self.next_entity_id);
        log::info!(
            "session started: player {id} at ({:.0}, {:.0})",
            pos.x(),
            pos.y()
        );
        self.events.push(SimEvent::SessionReset);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_ms: f64, input: &InputSnapshot) {
        // 1. Pending death transition. Counted down before anything else so
        //    the delay is measured from the tick after it was scheduled.
        self.advance_death_timer(dt_ms);
        if self.phase == SessionPhase::GameOver {
            return;
        }

        // 2. Enemy spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timer,
            &self.playfield,
            &self.config,
            &mut self.next_entity_id,
            dt_ms,
            &mut self.events,
        );

        // 3. Player steering and fire
        systems::movement::apply_input(&mut self.world, input, self.config.player_speed);
        if input.fire_pressed {
            self.try_fire();
        }

        // 4. Kinematic integration, then player clamp
        systems::movement::run(&mut self.world, dt_ms);
        systems::movement::clamp_player(&mut self.world, &self.playfield);

        // 5. Bounds exits (before collision, so overlap rules never see
        //    entities that left the field this tick)
        systems::bounds::run(
            &mut self.world,
            &self.playfield,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 6. Overlap resolution
        let player_hit = systems::collision::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        if player_hit.is_some() {
            let elapsed = self.clock.elapsed_ms();
            self.frozen_elapsed_ms = Some(elapsed);
            self.death_timer = Some(DeathTimer {
                remaining_ms: PLAYER_DEATH_DELAY_MS,
                elapsed_at_death_ms: elapsed,
            });
            log::info!("player hit at {elapsed} ms");
        }

        // 7. Explosion lifetimes
        systems::explosion::run(&mut self.world, dt_ms, &mut self.despawn_buffer);
    }

    /// Fire a projectile from the player's muzzle: right edge, vertically
    /// centered. Silently rejected at the live-projectile cap or when the
    /// player is already destroyed.
    fn try_fire(&mut self) {
        let live = self.world.query_mut::<&Projectile>().into_iter().count();
        if live >= self.config.max_active_projectiles {
            return;
        }

        let muzzle = {
            let mut query = self.world.query::<(&Position, &Player)>();
            match query.iter().next() {
                Some((_, (pos, _))) => Position::new(pos.x() + PLAYER_VISUAL_PX * 0.5, pos.y()),
                None => return,
            }
        };

        let (id, pos) = world_setup::spawn_projectile(
            &mut self.world,
            &self.config,
            &mut self.next_entity_id,
            muzzle,
        );
        self.events.push(SimEvent::ProjectileSpawned { id, pos });
    }

    fn advance_death_timer(&mut self, dt_ms: f64) {
        if let Some(timer) = &mut self.death_timer {
            timer.remaining_ms -= dt_ms;
            if timer.remaining_ms <= 0.0 {
                let elapsed = timer.elapsed_at_death_ms;
                self.death_timer = None;
                self.phase = SessionPhase::GameOver;
                self.events.push(SimEvent::PlayerDied {
                    elapsed_ms: elapsed,
                });
                log::info!("session over after {}", format_elapsed(elapsed));
            }
        }
    }
}
