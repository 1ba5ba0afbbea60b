//! Single-threaded behavior tree engine for game agents.
//!
//! This library lets a host assemble a tree of nodes once and then step it
//! repeatedly from its own scheduler. Each step descends from the root and
//! yields a [`Status`].
//!
//! - **Resumable**: Nodes that report `Running` or `Sleeping` pick up where
//!   they left off on the next step
//! - **Host-driven**: The engine owns no thread and no timer; time comes from
//!   a [`Clock`] the context provides
//! - **Context-generic**: Nodes operate on a caller-chosen context type `C`
//!   passed by mutable reference
//! - **Validated construction**: The [`Builder`] rejects malformed trees
//!   with a [`BuildError`] instead of producing them
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: `Success`, `Failure`, `Running` or `Sleeping`
//! - [`Node`]: Closed set of node kinds every tree is made of
//! - Leaf nodes: [`Action`], [`Condition`], [`Sleep`], [`SleepUntil`],
//!   [`SleepWhile`], [`Custom`]
//! - Composite nodes: [`Sequence`], [`Selector`], [`RandomSelector`],
//!   [`Parallel`]
//! - Decorator nodes: [`Inverter`], [`Repeater`], [`RetryUntilSuccess`],
//!   [`Cooldown`], [`SuccessRate`], [`SleepUntilSuccess`]
//! - Delegation: [`SubTree`], [`DynamicSubTree`]
//! - [`BehaviorTree`]: The validated root plus `tick`/`run`/`reset`

pub mod behavior;
pub mod blackboard;
pub mod builder;
pub mod clock;
pub mod composite;
pub mod config;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod node;
pub mod status;
pub mod subtree;
pub mod tree;

#[cfg(test)]
mod testing;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use blackboard::{Blackboard, KindMismatch, Value};
pub use builder::Builder;
pub use clock::{Clock, ClockFn, ManualClock, Tick};
pub use composite::{
    Composite, CompositeKind, Parallel, Policy, RandomSelector, Selector, Sequence,
};
pub use config::TreeConfig;
pub use decorator::{
    Chance, Cooldown, Decorator, Inverter, Limit, Repeater, RetryUntilSuccess, SleepUntilSuccess,
    SuccessRate,
};
pub use error::{BuildError, Result};
pub use leaf::{Action, Condition, Custom, Leaf, Sleep, SleepUntil, SleepWhile};
pub use node::Node;
pub use status::Status;
pub use subtree::{DynamicSubTree, SubTree};
pub use tree::BehaviorTree;
