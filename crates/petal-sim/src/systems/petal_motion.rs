//! Petal motion system.
//!
//! Runs the integrator over every petal. Petals are visited in id order so
//! the turbulence draws line up with the same petals for a given seed,
//! whatever the world's storage order.

use hecs::{Entity, World};
use rand::Rng;

use petal_core::action::Action;
use petal_core::config::AnimationConfig;
use petal_core::particle::Particle;

use crate::integrator;

pub fn run<R: Rng + ?Sized>(
    world: &mut World,
    config: &AnimationConfig,
    dt: f64,
    actions: &[Action],
    rng: &mut R,
) {
    let mut petals: Vec<(Entity, &mut Particle)> =
        world.query_mut::<&mut Particle>().into_iter().collect();
    petals.sort_by_key(|(_, petal)| petal.id);

    for (_entity, petal) in petals {
        let next = integrator::integrate(petal, config, dt, actions, rng);
        *petal = next;
    }
}
