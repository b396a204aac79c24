//! Petal particles.

use serde::{Deserialize, Serialize};

use crate::types::{SimTime, Vector3};

/// Stable particle identifier. Allocated by the engine and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticleId(pub u64);

/// An animated petal.
///
/// Only `position`, `velocity` and `rotation` evolve over time. The other
/// fields are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: ParticleId,
    /// Display color as a hex string. Opaque to the simulation.
    pub color: String,
    /// Positive scale factor.
    pub size: f64,
    pub position: Vector3,
    /// Per-axis rotation in degrees.
    pub rotation: Vector3,
    pub velocity: Vector3,
    pub created_at: SimTime,
}
