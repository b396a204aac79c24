//! Community actions: point impulses that push nearby petals.

use serde::{Deserialize, Serialize};

use crate::enums::ActionType;
use crate::types::{SimTime, Vector3};

/// Action identifier, allocated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActionId(pub u64);

/// A time-stamped community action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    #[serde(rename = "type")]
    pub kind: ActionType,
    pub position: Vector3,
    /// Impact scale in [0, 1].
    pub intensity: f64,
    pub timestamp: SimTime,
    pub user_id: String,
}
