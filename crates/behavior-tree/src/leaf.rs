//! Leaf behavior nodes.
//!
//! Leaves are the terminal nodes of a tree. They wrap externally supplied
//! callables ([`Action`], [`Condition`]), timing state ([`Sleep`],
//! [`SleepUntil`], [`SleepWhile`]), or a user-defined [`Behavior`]
//! ([`Custom`]).
//!
//! Callables must not block and must turn their own failures into
//! `Status::Failure`; the engine never catches anything on their behalf.

use crate::clock::{self, Clock, ClockFn, Tick};
use crate::{Behavior, Status};

/// Boxed action callable.
pub type ActionFn<C> = Box<dyn FnMut(&mut C) -> Status>;

/// Boxed predicate callable.
pub type PredicateFn<C> = Box<dyn FnMut(&mut C) -> bool>;

/// Invokes a callable every step and returns exactly the status it returns.
pub struct Action<C> {
    name: String,
    action: ActionFn<C>,
}

impl<C> Action<C> {
    /// Creates a named action.
    pub fn new(name: impl Into<String>, action: impl FnMut(&mut C) -> Status + 'static) -> Self {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }

    /// The name used in trace output.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<C> Behavior<C> for Action<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = (self.action)(ctx);
        tracing::trace!(action = %self.name, %status, "action stepped");
        status
    }
}

/// Maps a predicate to `Success` (true) or `Failure` (false).
///
/// Never returns a pending status.
pub struct Condition<C> {
    name: String,
    predicate: PredicateFn<C>,
}

impl<C> Condition<C> {
    /// Creates a named condition.
    pub fn new(name: impl Into<String>, predicate: impl FnMut(&mut C) -> bool + 'static) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    /// The name used in trace output.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = Status::from((self.predicate)(ctx));
        tracing::trace!(condition = %self.name, %status, "condition evaluated");
        status
    }
}

/// Sleeps for a fixed number of ticks, then succeeds.
///
/// # Semantics
///
/// - The first step after construction or reset captures the start tick
/// - While fewer than `duration` ticks have elapsed, returns `Sleeping`
/// - Once `duration` ticks have elapsed, clears the start tick and returns
///   `Success`, so the next step starts a fresh sleep
///
/// Never fails.
pub struct Sleep<C> {
    duration: Tick,
    start: Option<Tick>,
    clock: ClockFn<C>,
}

impl<C: Clock> Sleep<C> {
    /// Creates a sleep reading time from the context's [`Clock`].
    pub fn new(duration: Tick) -> Self {
        Self::with_clock(duration, C::now)
    }
}

impl<C> Sleep<C> {
    /// Creates a sleep reading time through `clock`.
    pub fn with_clock(duration: Tick, clock: ClockFn<C>) -> Self {
        Self {
            duration,
            start: None,
            clock,
        }
    }

    /// The tick captured by the current sleep, if one is in progress.
    pub fn started_at(&self) -> Option<Tick> {
        self.start
    }
}

impl<C> Behavior<C> for Sleep<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let now = (self.clock)(ctx);
        let start = *self.start.get_or_insert(now);

        if clock::elapsed(start, now) >= self.duration {
            self.start = None;
            return Status::Success;
        }

        Status::Sleeping
    }

    fn reset(&mut self) {
        self.start = None;
    }
}

/// Sleeps until a predicate holds, failing after a timeout.
///
/// # Semantics
///
/// Each step, after capturing the start tick if needed:
/// - If the predicate is true, clears its state and returns `Success`
/// - Else if `duration` ticks have elapsed, clears its state and returns `Failure`
/// - Otherwise returns `Sleeping`
pub struct SleepUntil<C> {
    predicate: PredicateFn<C>,
    duration: Tick,
    start: Option<Tick>,
    clock: ClockFn<C>,
}

impl<C: Clock> SleepUntil<C> {
    /// Creates a sleep-until reading time from the context's [`Clock`].
    pub fn new(predicate: impl FnMut(&mut C) -> bool + 'static, duration: Tick) -> Self {
        Self::with_clock(predicate, duration, C::now)
    }
}

impl<C> SleepUntil<C> {
    /// Creates a sleep-until reading time through `clock`.
    pub fn with_clock(
        predicate: impl FnMut(&mut C) -> bool + 'static,
        duration: Tick,
        clock: ClockFn<C>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            duration,
            start: None,
            clock,
        }
    }
}

impl<C> Behavior<C> for SleepUntil<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let now = (self.clock)(ctx);
        let start = *self.start.get_or_insert(now);

        if (self.predicate)(ctx) {
            self.start = None;
            return Status::Success;
        }

        if clock::elapsed(start, now) >= self.duration {
            self.start = None;
            return Status::Failure;
        }

        Status::Sleeping
    }

    fn reset(&mut self) {
        self.start = None;
    }
}

/// Sleeps while a predicate holds, failing after a timeout.
///
/// The inverse polarity of [`SleepUntil`]: the wait clears (`Success`) as soon
/// as the predicate turns false, and times out (`Failure`) if it is still true
/// after `duration` ticks.
pub struct SleepWhile<C> {
    predicate: PredicateFn<C>,
    duration: Tick,
    start: Option<Tick>,
    clock: ClockFn<C>,
}

impl<C: Clock> SleepWhile<C> {
    /// Creates a sleep-while reading time from the context's [`Clock`].
    pub fn new(predicate: impl FnMut(&mut C) -> bool + 'static, duration: Tick) -> Self {
        Self::with_clock(predicate, duration, C::now)
    }
}

impl<C> SleepWhile<C> {
    /// Creates a sleep-while reading time through `clock`.
    pub fn with_clock(
        predicate: impl FnMut(&mut C) -> bool + 'static,
        duration: Tick,
        clock: ClockFn<C>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            duration,
            start: None,
            clock,
        }
    }
}

impl<C> Behavior<C> for SleepWhile<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let now = (self.clock)(ctx);
        let start = *self.start.get_or_insert(now);

        if !(self.predicate)(ctx) {
            self.start = None;
            return Status::Success;
        }

        if clock::elapsed(start, now) >= self.duration {
            self.start = None;
            return Status::Failure;
        }

        Status::Sleeping
    }

    fn reset(&mut self) {
        self.start = None;
    }
}

/// A user-defined behavior spliced into the tree.
///
/// This wrapper drives the lifecycle hooks: `on_start` fires on the first
/// step of each fresh evaluation and `on_end` fires on the step that
/// produces a terminal status.
pub struct Custom<C> {
    behavior: Box<dyn Behavior<C>>,
    entered: bool,
}

impl<C> Custom<C> {
    /// Wraps a user-defined behavior.
    pub fn new(behavior: impl Behavior<C> + 'static) -> Self {
        Self {
            behavior: Box::new(behavior),
            entered: false,
        }
    }
}

impl<C> Behavior<C> for Custom<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if !self.entered {
            self.behavior.on_start(ctx);
            self.entered = true;
        }

        let status = self.behavior.tick(ctx);
        if status.is_terminal() {
            self.behavior.on_end(ctx, status);
            self.entered = false;
        }
        status
    }

    fn reset(&mut self) {
        self.entered = false;
        self.behavior.reset();
    }
}

/// Every kind of leaf the engine knows about.
pub enum Leaf<C> {
    Action(Action<C>),
    Condition(Condition<C>),
    Sleep(Sleep<C>),
    SleepUntil(SleepUntil<C>),
    SleepWhile(SleepWhile<C>),
    Custom(Custom<C>),
}

impl<C> Behavior<C> for Leaf<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self {
            Leaf::Action(node) => node.tick(ctx),
            Leaf::Condition(node) => node.tick(ctx),
            Leaf::Sleep(node) => node.tick(ctx),
            Leaf::SleepUntil(node) => node.tick(ctx),
            Leaf::SleepWhile(node) => node.tick(ctx),
            Leaf::Custom(node) => node.tick(ctx),
        }
    }

    fn reset(&mut self) {
        match self {
            Leaf::Action(_) | Leaf::Condition(_) => {}
            Leaf::Sleep(node) => node.reset(),
            Leaf::SleepUntil(node) => node.reset(),
            Leaf::SleepWhile(node) => node.reset(),
            Leaf::Custom(node) => node.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;

    #[derive(Default)]
    struct TestContext {
        clock: ManualClock,
        ready: bool,
        calls: u32,
    }

    impl Clock for TestContext {
        fn now(&self) -> Tick {
            self.clock.now()
        }
    }

    fn at(tick: Tick) -> TestContext {
        TestContext {
            clock: ManualClock::at(tick),
            ..Default::default()
        }
    }

    #[test]
    fn action_returns_callable_status() {
        let mut action = Action::new("count", |ctx: &mut TestContext| {
            ctx.calls += 1;
            Status::Running
        });

        let mut ctx = TestContext::default();
        assert_eq!(action.tick(&mut ctx), Status::Running);
        assert_eq!(action.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.calls, 2);
    }

    #[test]
    fn condition_maps_bool() {
        let mut condition = Condition::new("ready", |ctx: &mut TestContext| ctx.ready);

        let mut ctx = TestContext::default();
        assert_eq!(condition.tick(&mut ctx), Status::Failure);
        ctx.ready = true;
        assert_eq!(condition.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn sleep_waits_for_duration() {
        let mut sleep = Sleep::new(3);
        let mut ctx = at(10);

        for _ in 10..13 {
            assert_eq!(sleep.tick(&mut ctx), Status::Sleeping);
            assert_eq!(sleep.started_at(), Some(10));
            ctx.clock.advance(1);
        }

        assert_eq!(sleep.tick(&mut ctx), Status::Success);
        assert_eq!(sleep.started_at(), None);

        // A new cycle captures a fresh start tick.
        assert_eq!(sleep.tick(&mut ctx), Status::Sleeping);
        assert_eq!(sleep.started_at(), Some(13));
    }

    #[test]
    fn sleep_zero_succeeds_immediately() {
        let mut sleep = Sleep::new(0);
        assert_eq!(sleep.tick(&mut at(5)), Status::Success);
    }

    #[test]
    fn sleep_reset_recaptures_start() {
        let mut sleep = Sleep::new(5);
        let mut ctx = at(0);
        assert_eq!(sleep.tick(&mut ctx), Status::Sleeping);

        ctx.clock.set(4);
        sleep.reset();
        assert_eq!(sleep.tick(&mut ctx), Status::Sleeping);
        assert_eq!(sleep.started_at(), Some(4));
    }

    #[test]
    fn sleep_until_succeeds_when_predicate_holds() {
        let mut node = SleepUntil::new(|ctx: &mut TestContext| ctx.ready, 5);
        let mut ctx = at(0);

        assert_eq!(node.tick(&mut ctx), Status::Sleeping);
        ctx.clock.advance(1);
        assert_eq!(node.tick(&mut ctx), Status::Sleeping);
        ctx.clock.advance(1);
        ctx.ready = true;
        assert_eq!(node.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn sleep_until_times_out_exactly_at_duration() {
        let mut node = SleepUntil::new(|_: &mut TestContext| false, 5);
        let mut ctx = at(100);

        for _ in 0..5 {
            assert_eq!(node.tick(&mut ctx), Status::Sleeping);
            ctx.clock.advance(1);
        }
        assert_eq!(node.tick(&mut ctx), Status::Failure);

        // Timed out state was cleared; a new wait begins.
        assert_eq!(node.tick(&mut ctx), Status::Sleeping);
    }

    #[test]
    fn sleep_while_clears_when_predicate_turns_false() {
        let mut node = SleepWhile::new(|ctx: &mut TestContext| !ctx.ready, 3);
        let mut ctx = at(0);

        assert_eq!(node.tick(&mut ctx), Status::Sleeping);
        ctx.ready = true;
        ctx.clock.advance(1);
        assert_eq!(node.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn sleep_while_times_out() {
        let mut node = SleepWhile::new(|_: &mut TestContext| true, 2);
        let mut ctx = at(0);

        assert_eq!(node.tick(&mut ctx), Status::Sleeping);
        ctx.clock.advance(1);
        assert_eq!(node.tick(&mut ctx), Status::Sleeping);
        ctx.clock.advance(1);
        assert_eq!(node.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn timed_leaf_accepts_explicit_clock() {
        struct Turn(u64);
        let mut sleep = Sleep::with_clock(1, |turn: &Turn| turn.0);

        assert_eq!(sleep.tick(&mut Turn(7)), Status::Sleeping);
        assert_eq!(sleep.tick(&mut Turn(8)), Status::Success);
    }

    #[derive(Default)]
    struct Hooks {
        starts: u32,
        ends: u32,
        steps: u32,
    }

    struct TwoStep;
    impl Behavior<Hooks> for TwoStep {
        fn tick(&mut self, ctx: &mut Hooks) -> Status {
            ctx.steps += 1;
            if ctx.steps % 2 == 0 {
                Status::Success
            } else {
                Status::Running
            }
        }

        fn on_start(&mut self, ctx: &mut Hooks) {
            ctx.starts += 1;
        }

        fn on_end(&mut self, ctx: &mut Hooks, status: Status) {
            assert!(status.is_terminal());
            ctx.ends += 1;
        }
    }

    #[test]
    fn custom_fires_hooks_once_per_evaluation() {
        let mut custom = Custom::new(TwoStep);
        let mut ctx = Hooks::default();

        assert_eq!(custom.tick(&mut ctx), Status::Running);
        assert_eq!(custom.tick(&mut ctx), Status::Success);
        assert_eq!((ctx.starts, ctx.ends), (1, 1));

        assert_eq!(custom.tick(&mut ctx), Status::Running);
        custom.reset();
        assert_eq!(custom.tick(&mut ctx), Status::Success);
        assert_eq!((ctx.starts, ctx.ends), (3, 2));
    }
}
