//! Headless driver for the petal vortex engine.
//!
//! Parses action specs from the command line and runs the engine loop,
//! streaming JSON snapshots to any writer.

pub mod action_spec;
pub mod game_loop;

pub use petal_core as core;
