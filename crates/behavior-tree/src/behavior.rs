//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the capability every
//! tree element implements. The trait is generic over a context type `C`:
//! the host passes its context by `&mut` into every step, so leaves read
//! world state and the logical clock through it instead of through globals.

use crate::Status;

/// A behavior tree node that can be stepped against a context.
pub trait Behavior<C> {
    /// Evaluate one step of this node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the host context. Nodes can read
    ///   state and modify it (e.g., to store intermediate results).
    ///
    /// # Returns
    ///
    /// - `Status::Success` / `Status::Failure` when the node resolved
    /// - `Status::Running` / `Status::Sleeping` when it needs another step
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Discards accumulated progress so the next step starts from scratch.
    ///
    /// Nodes with children must reset them recursively.
    fn reset(&mut self) {}

    /// Called before the first step of a fresh evaluation.
    fn on_start(&mut self, _ctx: &mut C) {}

    /// Called after a step that produced a terminal status.
    fn on_end(&mut self, _ctx: &mut C, _status: Status) {}
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// so user-defined nodes can be stored behind dynamic dispatch.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset();
    }

    #[inline]
    fn on_start(&mut self, ctx: &mut C) {
        (**self).on_start(ctx);
    }

    #[inline]
    fn on_end(&mut self, ctx: &mut C, status: Status) {
        (**self).on_end(ctx, status);
    }
}
