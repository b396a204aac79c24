//! Petal factories: the initial mock petals and petals born from actions.

use rand::Rng;

use petal_core::action::Action;
use petal_core::constants::*;
use petal_core::particle::{Particle, ParticleId};
use petal_core::types::{SimTime, Vector3};

/// The two petals present before any action arrives.
pub fn initial_petals(next_id: &mut u64, now: SimTime) -> Vec<Particle> {
    let seeds = [
        (
            "#FF6B6B",
            1.2,
            Vector3::new(0.5, 0.3, 0.1),
            Vector3::new(0.0, 45.0, 0.0),
            Vector3::new(0.1, 0.2, 0.05),
        ),
        (
            "#4ECDC4",
            0.8,
            Vector3::new(-0.3, 0.4, 0.2),
            Vector3::new(30.0, 0.0, 15.0),
            Vector3::new(-0.15, 0.1, 0.08),
        ),
    ];

    seeds
        .into_iter()
        .map(|(color, size, position, rotation, velocity)| Particle {
            id: allocate(next_id),
            color: color.to_string(),
            size,
            position,
            rotation,
            velocity,
            created_at: now,
        })
        .collect()
}

/// Number of petals an action of the given intensity produces.
pub fn petal_count(intensity: f64) -> usize {
    (intensity.clamp(0.0, 1.0) * PETALS_PER_INTENSITY).floor() as usize
}

/// Spawn petals scattered around an action's position.
pub fn petals_from_action<R: Rng + ?Sized>(
    action: &Action,
    rng: &mut R,
    next_id: &mut u64,
    now: SimTime,
) -> Vec<Particle> {
    (0..petal_count(action.intensity))
        .map(|_| {
            let color = PETAL_COLORS[rng.gen_range(0..PETAL_COLORS.len())];
            let size = SPAWN_MIN_SIZE + rng.gen::<f64>() * SPAWN_SIZE_RANGE;
            let position = action.position + centered(rng) * SPAWN_POSITION_JITTER;
            let rotation = Vector3::new(rng.gen(), rng.gen(), rng.gen()) * SPAWN_MAX_ROTATION;
            let velocity = centered(rng) * SPAWN_VELOCITY_SPREAD;
            Particle {
                id: allocate(next_id),
                color: color.to_string(),
                size,
                position,
                rotation,
                velocity,
                created_at: now,
            }
        })
        .collect()
}

fn allocate(next_id: &mut u64) -> ParticleId {
    let id = ParticleId(*next_id);
    *next_id += 1;
    id
}

/// Per-axis uniform sample on [-0.5, 0.5).
fn centered<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    let x = rng.gen::<f64>() - 0.5;
    let y = rng.gen::<f64>() - 0.5;
    let z = rng.gen::<f64>() - 0.5;
    Vector3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_core::action::ActionId;
    use petal_core::enums::ActionType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn action(intensity: f64) -> Action {
        Action {
            id: ActionId(0),
            kind: ActionType::Grow,
            position: Vector3::new(1.0, -1.0, 2.0),
            intensity,
            timestamp: SimTime::default(),
            user_id: "anonymous".into(),
        }
    }

    #[test]
    fn count_floors_intensity() {
        assert_eq!(petal_count(1.0), 5);
        assert_eq!(petal_count(0.99), 4);
        assert_eq!(petal_count(0.2), 1);
        assert_eq!(petal_count(0.19), 0);
        assert_eq!(petal_count(0.0), 0);
        assert_eq!(petal_count(3.0), 5);
        assert_eq!(petal_count(-1.0), 0);
        assert_eq!(petal_count(f64::NAN), 0);
    }

    #[test]
    fn spawned_petals_stay_in_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut next_id = 10;
        let a = action(1.0);
        for _ in 0..50 {
            for petal in petals_from_action(&a, &mut rng, &mut next_id, SimTime::default()) {
                assert!(PETAL_COLORS.contains(&petal.color.as_str()));
                assert!((0.5..2.0).contains(&petal.size));
                let offset = (petal.position - a.position).abs();
                assert!(offset.cmple(Vector3::splat(0.1)).all());
                assert!(petal.rotation.cmpge(Vector3::ZERO).all());
                assert!(petal.rotation.cmplt(Vector3::splat(360.0)).all());
                assert!(petal.velocity.abs().cmple(Vector3::splat(0.1)).all());
            }
        }
        assert_eq!(next_id, 10 + 50 * 5);
    }

    #[test]
    fn ids_are_sequential() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut next_id = 0;
        let initial = initial_petals(&mut next_id, SimTime::default());
        let spawned = petals_from_action(&action(0.6), &mut rng, &mut next_id, SimTime::default());
        let ids: Vec<u64> = initial.iter().chain(&spawned).map(|p| p.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn initial_petals_match_mock_data() {
        let mut next_id = 0;
        let now = SimTime {
            tick: 3,
            elapsed_secs: 0.05,
        };
        let petals = initial_petals(&mut next_id, now);
        assert_eq!(petals.len(), 2);
        assert_eq!(petals[0].color, "#FF6B6B");
        assert_eq!(petals[0].velocity, Vector3::new(0.1, 0.2, 0.05));
        assert_eq!(petals[1].size, 0.8);
        assert_eq!(petals[1].rotation, Vector3::new(30.0, 0.0, 15.0));
        assert!(petals.iter().all(|p| p.created_at == now));
    }
}
