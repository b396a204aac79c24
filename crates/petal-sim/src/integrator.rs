//! Per-step particle integrator.
//!
//! Blends swirl, lift, gravity, wind, turbulence and nearby action impulses
//! into a velocity change, then advances position and rotation with
//! semi-implicit Euler and damps the velocity.

use rand::Rng;

use petal_core::action::Action;
use petal_core::config::AnimationConfig;
use petal_core::constants::{DAMPING, ROTATION_COUPLING};
use petal_core::enums::{DampingMode, SwirlMode};
use petal_core::particle::Particle;
use petal_core::types::Vector3;

/// Advance one particle by `dt` seconds.
///
/// Pure apart from drawing three samples from `rng` for turbulence; the
/// inputs are only borrowed and a new particle is returned. Only `position`,
/// `velocity` and `rotation` differ from the input.
///
/// `dt == 0` leaves position and rotation unchanged, but velocity is still
/// damped once.
pub fn integrate<R: Rng + ?Sized>(
    particle: &Particle,
    config: &AnimationConfig,
    dt: f64,
    actions: &[Action],
    rng: &mut R,
) -> Particle {
    let mut velocity = particle.velocity;

    let swirl = swirl_force(particle.position, config.swirl_speed);
    if config.swirl == SwirlMode::Applied {
        velocity += swirl * dt;
    }

    velocity.y += config.lift_force * dt;
    velocity.y -= config.gravity * dt;
    velocity += config.wind_force * dt;
    velocity += turbulence(rng, config.turbulence, dt);

    for action in actions {
        velocity += action_force(particle.position, action, config.interaction_radius) * dt;
    }

    // Semi-implicit: both updates see the new velocity.
    let position = particle.position + velocity * dt;
    let rotation = particle.rotation + velocity * ROTATION_COUPLING * dt;

    velocity *= match config.damping {
        DampingMode::PerStep => DAMPING,
        DampingMode::TimeScaled => DAMPING.powf(dt),
    };

    Particle {
        position,
        velocity,
        rotation,
        ..particle.clone()
    }
}

/// Tangential force around the vertical axis at `position`.
pub fn swirl_force(position: Vector3, swirl_speed: f64) -> Vector3 {
    let angle = position.x.atan2(position.z);
    Vector3::new(angle.cos() * swirl_speed, 0.0, angle.sin() * swirl_speed)
}

/// Force an action exerts on a particle at `position`, already scaled by
/// proximity and intensity.
///
/// Falls off linearly to zero at `radius`. Zero outside the radius, for
/// unknown action types, and whenever `radius` is not positive.
pub fn action_force(position: Vector3, action: &Action, radius: f64) -> Vector3 {
    if radius <= 0.0 {
        return Vector3::ZERO;
    }
    let distance = position.distance(action.position);
    if distance < radius {
        let influence = (1.0 - distance / radius) * action.intensity;
        action.kind.force() * influence
    } else {
        Vector3::ZERO
    }
}

/// Independent uniform sample per axis, centered on zero, full width
/// `turbulence * dt`. Always consumes three draws, x then y then z.
fn turbulence<R: Rng + ?Sized>(rng: &mut R, turbulence: f64, dt: f64) -> Vector3 {
    let x = (rng.gen::<f64>() - 0.5) * turbulence * dt;
    let y = (rng.gen::<f64>() - 0.5) * turbulence * dt;
    let z = (rng.gen::<f64>() - 0.5) * turbulence * dt;
    Vector3::new(x, y, z)
}
