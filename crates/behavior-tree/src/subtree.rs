//! Delegation to independently built trees.
//!
//! [`SubTree`] binds a nested tree once; [`DynamicSubTree`] asks a resolver
//! for a fresh tree whenever it starts a new evaluation, so the active
//! sub-behavior can change at runtime without rebuilding the parent.

use crate::{Behavior, BehaviorTree, Status};

/// Boxed resolver producing the nested tree for a [`DynamicSubTree`].
pub type ResolveFn<C> = Box<dyn FnMut(&C) -> BehaviorTree<C>>;

/// Forwards every step and reset to a nested tree it owns.
pub struct SubTree<C> {
    name: String,
    tree: BehaviorTree<C>,
}

impl<C> SubTree<C> {
    /// Binds `tree` under `name`.
    pub fn new(name: impl Into<String>, tree: BehaviorTree<C>) -> Self {
        Self {
            name: name.into(),
            tree,
        }
    }

    /// The name used in trace output.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<C> Behavior<C> for SubTree<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = self.tree.tick(ctx);
        tracing::trace!(subtree = %self.name, %status, "subtree stepped");
        status
    }

    fn reset(&mut self) {
        self.tree.reset();
    }
}

/// Delegates to a nested tree chosen at runtime.
///
/// # Semantics
///
/// - With no active delegate (first step, after a terminal result, or after
///   reset) the resolver is called to obtain one
/// - A pending delegate keeps being stepped, so its progress survives
///   across steps
/// - A terminal result is returned unchanged and releases the delegate
pub struct DynamicSubTree<C> {
    name: String,
    resolver: ResolveFn<C>,
    active: Option<BehaviorTree<C>>,
}

impl<C> DynamicSubTree<C> {
    /// Creates a dynamic subtree under `name`.
    pub fn new(
        name: impl Into<String>,
        resolver: impl FnMut(&C) -> BehaviorTree<C> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            resolver: Box::new(resolver),
            active: None,
        }
    }

    /// The name used in trace output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a delegate is currently mid-evaluation.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

impl<C> Behavior<C> for DynamicSubTree<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let tree = self.active.get_or_insert_with(|| {
            tracing::debug!(subtree = %self.name, "resolving dynamic subtree");
            (self.resolver)(&*ctx)
        });

        let status = tree.tick(ctx);
        if status.is_terminal() {
            self.active = None;
        }
        status
    }

    fn reset(&mut self) {
        self.active = None;
    }
}
