//! Animation tuning parameters and their JSON loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::{DampingMode, SwirlMode};
use crate::types::Vector3;

/// Errors raised while loading an [`AnimationConfig`] from disk or text.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config field `{field}` must be finite")]
    NonFinite { field: &'static str },
}

/// Tuning bundle consumed by every integration step.
///
/// Missing fields in a JSON document fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Magnitude of the tangential swirl force.
    pub swirl_speed: f64,
    /// Constant upward acceleration.
    pub lift_force: f64,
    /// Width of the per-axis random acceleration.
    pub turbulence: f64,
    /// Constant downward acceleration.
    pub gravity: f64,
    /// Constant directional acceleration.
    pub wind_force: Vector3,
    /// Actions at or beyond this distance have no influence.
    /// Non-positive values disable action influence entirely.
    pub interaction_radius: f64,
    pub swirl: SwirlMode,
    pub damping: DampingMode,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            swirl_speed: DEFAULT_SWIRL_SPEED,
            lift_force: DEFAULT_LIFT_FORCE,
            turbulence: DEFAULT_TURBULENCE,
            gravity: DEFAULT_GRAVITY,
            wind_force: Vector3::from_array(DEFAULT_WIND_FORCE),
            interaction_radius: DEFAULT_INTERACTION_RADIUS,
            swirl: SwirlMode::default(),
            damping: DampingMode::default(),
        }
    }
}

impl AnimationConfig {
    /// Parse a config from JSON text and check that every value is finite.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: AnimationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject NaN and infinite values. The integrator itself never checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("swirl_speed", self.swirl_speed),
            ("lift_force", self.lift_force),
            ("turbulence", self.turbulence),
            ("gravity", self.gravity),
            ("interaction_radius", self.interaction_radius),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if !self.wind_force.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "wind_force",
            });
        }
        Ok(())
    }
}
