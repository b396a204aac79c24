//! Cleanup system: caps the petal population by evicting the oldest petals.

use hecs::{Entity, World};

use petal_core::particle::{Particle, ParticleId};

/// Despawn the lowest-id petals until at most `max_petals` remain.
/// Returns how many were removed. `None` means unbounded.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    max_petals: Option<usize>,
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    despawn_buffer.clear();

    let Some(cap) = max_petals else {
        return 0;
    };

    let mut petals: Vec<(Entity, ParticleId)> = world
        .query_mut::<&Particle>()
        .into_iter()
        .map(|(entity, petal)| (entity, petal.id))
        .collect();
    if petals.len() <= cap {
        return 0;
    }

    petals.sort_by_key(|&(_, id)| id);
    let excess = petals.len() - cap;
    despawn_buffer.extend(petals.iter().take(excess).map(|&(entity, _)| entity));

    let evicted = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    evicted
}
