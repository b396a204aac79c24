//! Events emitted by the engine alongside each snapshot.

use serde::{Deserialize, Serialize};

use crate::action::ActionId;
use crate::enums::ActionType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// An action was recorded and spawned petals.
    ActionAccepted {
        action_id: ActionId,
        kind: ActionType,
        petals_spawned: u32,
    },
    /// Petals were removed by the cap policy.
    PetalsEvicted { count: u32 },
    /// The engine state was reset.
    Reset,
}
