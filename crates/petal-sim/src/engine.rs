//! Simulation engine: the explicit petal-system store.
//!
//! `PetalEngine` owns the hecs world of petals, the bounded action history
//! and the seeded RNG. It processes commands, runs the systems and produces
//! `PetalSystemState` snapshots. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use petal_core::action::{Action, ActionId};
use petal_core::commands::SimCommand;
use petal_core::config::AnimationConfig;
use petal_core::constants::{ANONYMOUS_USER, DEFAULT_ACTION_INTENSITY, DT};
use petal_core::enums::{ActionType, EnginePhase};
use petal_core::events::SimEvent;
use petal_core::particle::Particle;
use petal_core::state::PetalSystemState;
use petal_core::types::{SimTime, Vector3};

use crate::history::ActionHistory;
use crate::spawner;
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Tuning passed to the integrator every tick.
    pub animation: AnimationConfig,
    /// Upper bound on live petals; the oldest are evicted first.
    /// `None` leaves the population unbounded.
    pub max_petals: Option<usize>,
    /// Spawn the two initial petals on construction and reset.
    pub seed_initial_petals: bool,
    /// Simulated seconds per tick.
    pub dt: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            animation: AnimationConfig::default(),
            max_petals: None,
            seed_initial_petals: true,
            dt: DT,
        }
    }
}

/// The simulation engine. Owns the petal world and all sim state.
pub struct PetalEngine {
    world: World,
    time: SimTime,
    phase: EnginePhase,
    animation: AnimationConfig,
    dt: f64,
    max_petals: Option<usize>,
    seed_initial_petals: bool,
    rng: ChaCha8Rng,
    next_particle_id: u64,
    next_action_id: u64,
    actions: ActionHistory,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl PetalEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: EnginePhase::default(),
            animation: config.animation,
            dt: config.dt,
            max_petals: config.max_petals,
            seed_initial_petals: config.seed_initial_petals,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_particle_id: 0,
            next_action_id: 0,
            actions: ActionHistory::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        engine.populate();
        engine
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> PetalSystemState {
        self.process_commands();

        if self.phase == EnginePhase::Running {
            self.run_systems();
            self.time.advance(self.dt);
        }

        self.snapshot()
    }

    /// Record an action immediately and spawn its petals.
    ///
    /// Returns the stored action and the new petals. Missing or non-finite
    /// intensity means full intensity; values outside [0, 1] are clamped.
    pub fn submit_action(
        &mut self,
        kind: ActionType,
        position: Vector3,
        intensity: Option<f64>,
        user_id: Option<String>,
    ) -> (Action, Vec<Particle>) {
        let requested = match intensity {
            Some(value) if !value.is_finite() => {
                warn!(value, "non-finite action intensity replaced with default");
                DEFAULT_ACTION_INTENSITY
            }
            Some(value) => value,
            None => DEFAULT_ACTION_INTENSITY,
        };
        let intensity = requested.clamp(0.0, 1.0);
        if intensity != requested {
            warn!(requested, intensity, "action intensity clamped");
        }
        if kind == ActionType::Unknown {
            warn!("action of unknown type recorded; it will not move petals");
        }

        let action = Action {
            id: ActionId(self.next_action_id),
            kind,
            position,
            intensity,
            timestamp: self.time,
            user_id: user_id.unwrap_or_else(|| ANONYMOUS_USER.to_string()),
        };
        self.next_action_id += 1;

        let petals = spawner::petals_from_action(
            &action,
            &mut self.rng,
            &mut self.next_particle_id,
            self.time,
        );
        for petal in &petals {
            self.world.spawn((petal.clone(),));
        }

        let discarded = self.actions.push(action.clone());
        debug!(
            action_id = action.id.0,
            kind = %action.kind,
            petals = petals.len(),
            discarded,
            "action accepted"
        );
        self.events.push(SimEvent::ActionAccepted {
            action_id: action.id,
            kind: action.kind,
            petals_spawned: petals.len() as u32,
        });

        (action, petals)
    }

    /// Snapshot the current state without advancing. Drains pending events.
    pub fn snapshot(&mut self) -> PetalSystemState {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.actions.as_slice(),
            events,
        )
    }

    /// Get the current engine phase.
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the animation config in effect.
    pub fn animation_config(&self) -> &AnimationConfig {
        &self.animation
    }

    /// Retained actions, oldest first.
    pub fn actions(&self) -> &[Action] {
        self.actions.as_slice()
    }

    /// Number of live petals.
    pub fn petal_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Get a read-only reference to the petal world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::SubmitAction {
                kind,
                position,
                intensity,
                user_id,
            } => {
                self.submit_action(kind, position, intensity, user_id);
            }
            SimCommand::SetAnimationConfig { config } => match config.validate() {
                Ok(()) => {
                    debug!(?config, "animation config replaced");
                    self.animation = config;
                }
                Err(err) => warn!(%err, "animation config rejected"),
            },
            SimCommand::Pause => {
                self.phase = EnginePhase::Paused;
            }
            SimCommand::Resume => {
                self.phase = EnginePhase::Running;
            }
            SimCommand::Reset => {
                self.world.clear();
                self.actions.clear();
                self.time = SimTime::default();
                self.phase = EnginePhase::Running;
                self.populate();
                self.events.push(SimEvent::Reset);
                info!(petals = self.petal_count(), "engine reset");
            }
        }
    }

    /// Spawn the initial petals if configured.
    fn populate(&mut self) {
        if !self.seed_initial_petals {
            return;
        }
        for petal in spawner::initial_petals(&mut self.next_particle_id, self.time) {
            self.world.spawn((petal,));
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Petal motion
        systems::petal_motion::run(
            &mut self.world,
            &self.animation,
            self.dt,
            self.actions.as_slice(),
            &mut self.rng,
        );
        // 2. Population cap
        let evicted = systems::cleanup::run(
            &mut self.world,
            self.max_petals,
            &mut self.despawn_buffer,
        );
        if evicted > 0 {
            debug!(evicted, "petals evicted over cap");
            self.events.push(SimEvent::PetalsEvicted {
                count: evicted as u32,
            });
        }
    }
}
