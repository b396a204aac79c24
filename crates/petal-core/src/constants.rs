//! Simulation constants and tuning parameters.

/// Engine tick rate (Hz), one tick per animation frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Integrator ---

/// Velocity multiplier applied at the end of every integration step.
pub const DAMPING: f64 = 0.98;

/// Scale from linear velocity to rotation change (degrees per unit of travel).
pub const ROTATION_COUPLING: f64 = 50.0;

// --- Default animation config ---

pub const DEFAULT_SWIRL_SPEED: f64 = 0.5;
pub const DEFAULT_LIFT_FORCE: f64 = 0.2;
pub const DEFAULT_TURBULENCE: f64 = 0.1;
pub const DEFAULT_GRAVITY: f64 = 0.1;
pub const DEFAULT_WIND_FORCE: [f64; 3] = [0.1, 0.0, 0.1];
pub const DEFAULT_INTERACTION_RADIUS: f64 = 2.0;

// --- Action history ---

/// Number of most recent actions retained by the engine.
pub const MAX_ACTION_HISTORY: usize = 100;

/// Intensity used when a submitted action omits one.
pub const DEFAULT_ACTION_INTENSITY: f64 = 1.0;

/// User id recorded when a submitted action omits one.
pub const ANONYMOUS_USER: &str = "anonymous";

// --- Petal spawning ---

/// Petals spawned per unit of action intensity (floored).
pub const PETALS_PER_INTENSITY: f64 = 5.0;

/// Full width of the positional jitter around the action point.
pub const SPAWN_POSITION_JITTER: f64 = 0.2;

/// Full width of the initial velocity spread.
pub const SPAWN_VELOCITY_SPREAD: f64 = 0.2;

/// Smallest spawned petal size.
pub const SPAWN_MIN_SIZE: f64 = 0.5;

/// Random size added on top of `SPAWN_MIN_SIZE`.
pub const SPAWN_SIZE_RANGE: f64 = 1.5;

/// Upper bound of the initial per-axis rotation (degrees).
pub const SPAWN_MAX_ROTATION: f64 = 360.0;

/// Petal palette: coral, turquoise, yellow, purple, mint, orange.
pub const PETAL_COLORS: [&str; 6] = [
    "#FF6B6B", "#4ECDC4", "#FFE66D", "#6B5B95", "#88D8B0", "#FF9F1C",
];
