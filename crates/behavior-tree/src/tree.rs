//! The tree facade handed to the host.

use crate::config::TreeConfig;
use crate::{Behavior, Builder, Node, Status};

/// A validated tree: a single root node plus run policy.
///
/// The host owns the tree and its context, and calls [`tick`](Self::tick) or
/// [`run`](Self::run) once per scheduling interval.
pub struct BehaviorTree<C> {
    root: Box<Node<C>>,
    max_run_steps: Option<usize>,
}

impl<C> BehaviorTree<C> {
    /// Creates a builder with default configuration.
    pub fn builder() -> Builder<C> {
        Builder::new()
    }

    /// Wraps an already assembled root node.
    pub fn new(root: Node<C>) -> Self {
        Self {
            root: Box::new(root),
            max_run_steps: None,
        }
    }

    pub(crate) fn with_config(root: Node<C>, config: &TreeConfig) -> Self {
        Self {
            root: Box::new(root),
            max_run_steps: config.max_run_steps,
        }
    }

    /// The root node.
    pub fn root(&self) -> &Node<C> {
        &self.root
    }

    /// Executes one step of the tree.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        let status = self.root.tick(ctx);
        tracing::trace!(%status, "tree stepped");
        status
    }

    /// Steps the tree while it reports `Running`.
    ///
    /// Returns as soon as any other status is observed. `Sleeping` is
    /// returned to the caller rather than looped through, so the host loop
    /// is never blocked by a timed wait. With `max_run_steps` configured the
    /// loop also gives up after that many steps and returns `Running`.
    pub fn run(&mut self, ctx: &mut C) -> Status {
        let mut steps = 0usize;
        loop {
            let status = self.tick(ctx);
            if status != Status::Running {
                return status;
            }

            steps += 1;
            if let Some(max) = self.max_run_steps
                && steps >= max
            {
                tracing::debug!(steps, "run step limit reached; yielding");
                return status;
            }
        }
    }

    /// Discards all transient progress in the tree.
    pub fn reset(&mut self) {
        self.root.reset();
    }
}

impl<C> Behavior<C> for BehaviorTree<C> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        BehaviorTree::tick(self, ctx)
    }

    #[inline]
    fn reset(&mut self) {
        BehaviorTree::reset(self);
    }
}
