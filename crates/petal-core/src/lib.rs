//! Core types and definitions for the petal vortex simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! particles, actions, the animation config, commands, events, snapshots
//! and constants. It has no dependency on the simulation runtime.

pub mod action;
pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod particle;
pub mod state;
pub mod types;
