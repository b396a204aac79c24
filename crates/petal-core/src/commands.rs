//! Commands sent from a driver to the engine.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;
use crate::enums::ActionType;
use crate::types::Vector3;

/// All engine inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Record a community action and spawn petals from it.
    SubmitAction {
        kind: ActionType,
        position: Vector3,
        /// Defaults to full intensity.
        #[serde(default)]
        intensity: Option<f64>,
        /// Defaults to the anonymous user.
        #[serde(default)]
        user_id: Option<String>,
    },
    /// Replace the animation config used from the next tick on.
    SetAnimationConfig { config: AnimationConfig },
    /// Stop advancing time.
    Pause,
    /// Continue advancing time.
    Resume,
    /// Drop all petals and actions and restore the initial petals.
    Reset,
}
