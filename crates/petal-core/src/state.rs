//! Petal system snapshot: the complete visible state after each tick.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::enums::EnginePhase;
use crate::events::SimEvent;
use crate::particle::Particle;
use crate::types::SimTime;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PetalSystemState {
    pub phase: EnginePhase,
    /// Petals ordered by id.
    pub petals: Vec<Particle>,
    /// Retained actions, oldest first.
    pub actions: Vec<Action>,
    pub last_updated: SimTime,
    /// Events raised since the previous snapshot.
    pub events: Vec<SimEvent>,
}
