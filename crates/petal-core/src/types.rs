//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D vector in simulation space. Unitless; y is up.
///
/// A `Copy` value type, so a particle never shares storage with the caller's
/// vectors.
pub type Vector3 = glam::DVec3;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
