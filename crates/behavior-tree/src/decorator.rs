//! Decorator behavior nodes.
//!
//! Decorators wrap a single child node and modify its result or gate when it
//! runs. This module provides [`Inverter`] (NOT logic), [`Repeater`] and
//! [`RetryUntilSuccess`] (loops), [`Cooldown`] (clock gating),
//! [`SuccessRate`] (probabilistic override) and [`SleepUntilSuccess`]
//! (timed wait on the child).
//!
//! Loop decorators yield `Running` between iterations instead of looping
//! inside a single step, so an unbounded loop over an instant child never
//! traps the caller.

use rand::Rng;
use rand::rngs::StdRng;

use crate::clock::{self, Clock, ClockFn, Tick};
use crate::error::{BuildError, Result};
use crate::{Behavior, Node, Status};

/// Iteration bound for [`Repeater`] and [`RetryUntilSuccess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Limit {
    /// Stop after this many iterations.
    Times(u32),
    /// Never stop on count alone.
    Forever,
}

impl Limit {
    #[inline]
    fn reached(self, count: u32) -> bool {
        match self {
            Limit::Times(max) => count >= max,
            Limit::Forever => false,
        }
    }
}

impl From<u32> for Limit {
    fn from(times: u32) -> Self {
        Limit::Times(times)
    }
}

/// Probability in `[0, 1]` that a child success is kept.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Chance(f64);

impl Chance {
    /// Validates a probability.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidChance`] for NaN, infinities and values
    /// outside `[0, 1]`.
    pub fn new(chance: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&chance) {
            Ok(Self(chance))
        } else {
            Err(BuildError::InvalidChance { chance })
        }
    }

    /// The probability as a float.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Inverts the result of its child.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` and `Sleeping` pass through unchanged
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Box<Node<C>>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child.
    pub fn new(child: Node<C>) -> Self {
        Self {
            child: Box::new(child),
        }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}

/// Runs its child repeatedly until it has succeeded `limit` times.
///
/// # Semantics
///
/// - Child `Success` counts one iteration. If the limit is reached the
///   counter rewinds and `Success` is returned; otherwise the child is reset
///   and `Running` is returned so the next step starts a new iteration
/// - Child `Failure` aborts the loop: the counter rewinds and `Failure` is
///   returned
/// - `Running` and `Sleeping` pass through unchanged
///
/// `Limit::Times(0)` succeeds without stepping the child.
pub struct Repeater<C> {
    child: Box<Node<C>>,
    limit: Limit,
    count: u32,
}

impl<C> Repeater<C> {
    /// Creates a repeater around `child`.
    pub fn new(child: Node<C>, limit: Limit) -> Self {
        Self {
            child: Box::new(child),
            limit,
            count: 0,
        }
    }

    /// Iterations completed in the current loop.
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.limit.reached(self.count) {
            self.count = 0;
            return Status::Success;
        }

        match self.child.tick(ctx) {
            Status::Success => {
                self.count = self.count.saturating_add(1);
                if self.limit.reached(self.count) {
                    self.count = 0;
                    return Status::Success;
                }
                self.child.reset();
                Status::Running
            }
            Status::Failure => {
                self.count = 0;
                Status::Failure
            }
            pending => pending,
        }
    }

    fn reset(&mut self) {
        self.count = 0;
        self.child.reset();
    }
}

/// Restarts its child after failures until it succeeds or attempts run out.
///
/// # Semantics
///
/// - Child `Success` rewinds the attempt counter and returns `Success`
/// - Child `Failure` uses up one attempt. If attempts remain the child is
///   reset and `Running` is returned; otherwise the counter rewinds and
///   `Failure` is returned
/// - `Running` and `Sleeping` pass through unchanged
///
/// `Limit::Times(0)` fails without stepping the child.
pub struct RetryUntilSuccess<C> {
    child: Box<Node<C>>,
    limit: Limit,
    attempts: u32,
}

impl<C> RetryUntilSuccess<C> {
    /// Creates a retry decorator around `child`.
    pub fn new(child: Node<C>, limit: Limit) -> Self {
        Self {
            child: Box::new(child),
            limit,
            attempts: 0,
        }
    }

    /// Failed attempts in the current loop.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl<C> Behavior<C> for RetryUntilSuccess<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.limit.reached(self.attempts) {
            self.attempts = 0;
            return Status::Failure;
        }

        match self.child.tick(ctx) {
            Status::Success => {
                self.attempts = 0;
                Status::Success
            }
            Status::Failure => {
                self.attempts = self.attempts.saturating_add(1);
                if self.limit.reached(self.attempts) {
                    self.attempts = 0;
                    return Status::Failure;
                }
                self.child.reset();
                Status::Running
            }
            pending => pending,
        }
    }

    fn reset(&mut self) {
        self.attempts = 0;
        self.child.reset();
    }
}

/// Blocks its child for a number of ticks after each terminal result.
///
/// # Semantics
///
/// - While the cooldown is armed and has not expired, returns `Failure`
///   without stepping the child
/// - Otherwise steps the child; a terminal result arms the cooldown until
///   `now + ticks`
///
/// Reset disarms the cooldown.
pub struct Cooldown<C> {
    child: Box<Node<C>>,
    ticks: Tick,
    ready_at: Option<Tick>,
    clock: ClockFn<C>,
}

impl<C: Clock> Cooldown<C> {
    /// Creates a cooldown reading time from the context's [`Clock`].
    pub fn new(child: Node<C>, ticks: Tick) -> Self {
        Self::with_clock(child, ticks, C::now)
    }
}

impl<C> Cooldown<C> {
    /// Creates a cooldown reading time through `clock`.
    pub fn with_clock(child: Node<C>, ticks: Tick, clock: ClockFn<C>) -> Self {
        Self {
            child: Box::new(child),
            ticks,
            ready_at: None,
            clock,
        }
    }

    /// The tick at which the child may run again, if armed.
    pub fn ready_at(&self) -> Option<Tick> {
        self.ready_at
    }
}

impl<C> Behavior<C> for Cooldown<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let now = (self.clock)(ctx);
        if let Some(ready_at) = self.ready_at
            && now < ready_at
        {
            tracing::trace!(now, ready_at, "cooldown gating child");
            return Status::Failure;
        }

        let status = self.child.tick(ctx);
        if status.is_terminal() {
            self.ready_at = Some(now.saturating_add(self.ticks));
        }
        status
    }

    fn reset(&mut self) {
        self.ready_at = None;
        self.child.reset();
    }
}

/// Randomly turns child successes into failures.
///
/// Each child `Success` draws a fresh sample and is kept with probability
/// `chance`; otherwise `Failure` is reported. `Failure` and pending statuses
/// pass through unmodified.
pub struct SuccessRate<C> {
    child: Box<Node<C>>,
    chance: Chance,
    rng: StdRng,
}

impl<C> SuccessRate<C> {
    /// Creates a success-rate gate around `child`.
    pub fn new(child: Node<C>, chance: Chance, rng: StdRng) -> Self {
        Self {
            child: Box::new(child),
            chance,
            rng,
        }
    }
}

impl<C> Behavior<C> for SuccessRate<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self.child.tick(ctx) {
            Status::Success if !self.rng.gen_bool(self.chance.get()) => {
                tracing::trace!(chance = self.chance.get(), "success overridden");
                Status::Failure
            }
            status => status,
        }
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}

/// Steps its child until it succeeds, giving up after `duration` ticks.
///
/// This is the decorator form of [`SleepUntil`](crate::leaf::SleepUntil):
/// the wrapped node plays the role of the predicate.
///
/// # Semantics
///
/// - Child `Success` clears the timer and returns `Success`
/// - Once `duration` ticks have elapsed without success, the child is reset,
///   the timer cleared and `Failure` returned
/// - Child `Failure` before the timeout resets the child and returns `Sleeping`
/// - `Running` and `Sleeping` pass through unchanged
pub struct SleepUntilSuccess<C> {
    child: Box<Node<C>>,
    duration: Tick,
    start: Option<Tick>,
    clock: ClockFn<C>,
}

impl<C: Clock> SleepUntilSuccess<C> {
    /// Creates the decorator reading time from the context's [`Clock`].
    pub fn new(child: Node<C>, duration: Tick) -> Self {
        Self::with_clock(child, duration, C::now)
    }
}

impl<C> SleepUntilSuccess<C> {
    /// Creates the decorator reading time through `clock`.
    pub fn with_clock(child: Node<C>, duration: Tick, clock: ClockFn<C>) -> Self {
        Self {
            child: Box::new(child),
            duration,
            start: None,
            clock,
        }
    }
}

impl<C> Behavior<C> for SleepUntilSuccess<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let now = (self.clock)(ctx);
        let start = *self.start.get_or_insert(now);

        let status = self.child.tick(ctx);
        if status.is_success() {
            self.start = None;
            return Status::Success;
        }

        if clock::elapsed(start, now) >= self.duration {
            self.reset();
            return Status::Failure;
        }

        if status.is_failure() {
            self.child.reset();
            return Status::Sleeping;
        }
        status
    }

    fn reset(&mut self) {
        self.start = None;
        self.child.reset();
    }
}

/// Every kind of decorator the engine knows about.
pub enum Decorator<C> {
    Inverter(Inverter<C>),
    Repeater(Repeater<C>),
    RetryUntilSuccess(RetryUntilSuccess<C>),
    Cooldown(Cooldown<C>),
    SuccessRate(SuccessRate<C>),
    SleepUntilSuccess(SleepUntilSuccess<C>),
}

impl<C> Decorator<C> {
    /// The wrapped node.
    pub fn child(&self) -> &Node<C> {
        match self {
            Decorator::Inverter(node) => node.child.as_ref(),
            Decorator::Repeater(node) => node.child.as_ref(),
            Decorator::RetryUntilSuccess(node) => node.child.as_ref(),
            Decorator::Cooldown(node) => node.child.as_ref(),
            Decorator::SuccessRate(node) => node.child.as_ref(),
            Decorator::SleepUntilSuccess(node) => node.child.as_ref(),
        }
    }
}

impl<C> Behavior<C> for Decorator<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self {
            Decorator::Inverter(node) => node.tick(ctx),
            Decorator::Repeater(node) => node.tick(ctx),
            Decorator::RetryUntilSuccess(node) => node.tick(ctx),
            Decorator::Cooldown(node) => node.tick(ctx),
            Decorator::SuccessRate(node) => node.tick(ctx),
            Decorator::SleepUntilSuccess(node) => node.tick(ctx),
        }
    }

    fn reset(&mut self) {
        match self {
            Decorator::Inverter(node) => node.reset(),
            Decorator::Repeater(node) => node.reset(),
            Decorator::RetryUntilSuccess(node) => node.reset(),
            Decorator::Cooldown(node) => node.reset(),
            Decorator::SuccessRate(node) => node.reset(),
            Decorator::SleepUntilSuccess(node) => node.reset(),
        }
    }
}
