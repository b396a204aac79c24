//! Simulation engine for the petal vortex.
//!
//! Holds the petals in a hecs world, advances them with the particle
//! integrator at a fixed tick rate, and produces `PetalSystemState`
//! snapshots for the driver.

pub mod engine;
pub mod history;
pub mod integrator;
pub mod spawner;
pub mod systems;

pub use engine::{PetalEngine, SimConfig};
pub use integrator::integrate;
pub use petal_core as core;
