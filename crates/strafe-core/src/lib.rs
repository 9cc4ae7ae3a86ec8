//! Core types and definitions for the strafe shooter simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, configuration, events, input snapshots, and the
//! render-facing session snapshot. It has no dependency on any
//! rendering or windowing framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
