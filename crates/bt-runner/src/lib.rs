//! Reference host for the behavior tree engine.
//!
//! Owns a tree and its context, and steps the tree on a fixed cadence with
//! start/pause gating. The demo [`patrol`] world exercises the engine without
//! any game-specific behavior.

pub mod config;
pub mod patrol;
pub mod scheduler;

pub use config::RunnerConfig;
pub use patrol::{Patrol, patrol_tree};
pub use scheduler::{Host, RunState, Scheduler};
