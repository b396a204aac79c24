//! Snapshot system: builds a `PetalSystemState` from the world.

use hecs::World;

use petal_core::action::Action;
use petal_core::enums::EnginePhase;
use petal_core::events::SimEvent;
use petal_core::particle::Particle;
use petal_core::state::PetalSystemState;
use petal_core::types::SimTime;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: EnginePhase,
    actions: &[Action],
    events: Vec<SimEvent>,
) -> PetalSystemState {
    let mut petals: Vec<Particle> = {
        let mut query = world.query::<&Particle>();
        query.iter().map(|(_entity, petal)| petal.clone()).collect()
    };
    petals.sort_by_key(|petal| petal.id);

    PetalSystemState {
        phase,
        petals,
        actions: actions.to_vec(),
        last_updated: *time,
        events,
    }
}
