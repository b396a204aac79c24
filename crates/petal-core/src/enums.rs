//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Vector3;

/// Category of a community action.
///
/// Serialized as its lowercase name. Any name outside the closed set
/// deserializes to `Unknown` instead of failing. The unrecognized name is
/// not kept: `Unknown` serializes back as `"unknown"`, so `"celebrate"`
/// does not round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionType {
    /// Positive community action.
    Uplift,
    /// Supporting others.
    Support,
    /// Healing action.
    Heal,
    /// Growth action.
    Grow,
    /// Connection action.
    Connect,
    /// Anything else. Exerts no force.
    Unknown,
}

impl ActionType {
    /// Every mapped category, in declaration order.
    pub const ALL: [ActionType; 5] = [
        ActionType::Uplift,
        ActionType::Support,
        ActionType::Heal,
        ActionType::Grow,
        ActionType::Connect,
    ];

    /// Resolve a category name. Unrecognized names map to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "uplift" => ActionType::Uplift,
            "support" => ActionType::Support,
            "heal" => ActionType::Heal,
            "grow" => ActionType::Grow,
            "connect" => ActionType::Connect,
            _ => ActionType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Uplift => "uplift",
            ActionType::Support => "support",
            ActionType::Heal => "heal",
            ActionType::Grow => "grow",
            ActionType::Connect => "connect",
            ActionType::Unknown => "unknown",
        }
    }

    /// Fixed force vector this category applies to nearby petals.
    pub fn force(&self) -> Vector3 {
        match self {
            ActionType::Uplift => Vector3::new(0.0, 0.5, 0.0),
            ActionType::Support => Vector3::new(0.2, 0.3, 0.2),
            ActionType::Heal => Vector3::new(0.0, 0.4, 0.1),
            ActionType::Grow => Vector3::new(0.1, 0.6, 0.1),
            ActionType::Connect => Vector3::new(0.3, 0.2, 0.3),
            ActionType::Unknown => Vector3::ZERO,
        }
    }
}

impl From<String> for ActionType {
    fn from(name: String) -> Self {
        ActionType::from_name(&name)
    }
}

impl From<ActionType> for String {
    fn from(kind: ActionType) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the tangential swirl force contributes to velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwirlMode {
    /// Swirl is computed but not added to velocity.
    #[default]
    Omitted,
    /// Swirl is added to velocity, scaled by the time step.
    Applied,
}

/// How velocity damping relates to the time step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DampingMode {
    /// Multiply by `DAMPING` once per step regardless of dt.
    /// The effective decay rate therefore depends on the call frequency.
    #[default]
    PerStep,
    /// Multiply by `DAMPING^dt`, so decay depends on elapsed time only.
    TimeScaled,
}

/// Engine run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    #[default]
    Running,
    Paused,
}
