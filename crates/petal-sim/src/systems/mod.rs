//! Systems that operate on the petal world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; every petal lives in the world as a `Particle`.

pub mod cleanup;
pub mod petal_motion;
pub mod snapshot;
