//! Fixed-cadence driver for a single behavior tree.
//!
//! The [`Scheduler`] owns both the tree and the context it runs against.
//! Each [`pulse`](Scheduler::pulse) advances the host clock and runs the
//! tree once, but only while the scheduler is started and the host reports
//! it is ready.

use std::time::Duration;

use behavior_tree::{BehaviorTree, Clock, Status};
use tracing::{debug, info, trace};

/// A context the scheduler can drive.
pub trait Host: Clock {
    /// Moves the logical clock forward by one pulse.
    fn advance(&mut self);

    /// Whether the world is in a state where the tree may act.
    fn is_ready(&self) -> bool {
        true
    }
}

/// Lifecycle of a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RunState {
    Idle,
    Started,
    Paused,
}

pub struct Scheduler<C> {
    tree: BehaviorTree<C>,
    ctx: C,
    state: RunState,
    pulses: u64,
}

impl<C: Host> Scheduler<C> {
    pub fn new(tree: BehaviorTree<C>, ctx: C) -> Self {
        Self {
            tree,
            ctx,
            state: RunState::Idle,
            pulses: 0,
        }
    }

    pub fn start(&mut self) {
        if self.state != RunState::Started {
            info!(from = %self.state, "scheduler started");
            self.state = RunState::Started;
        }
    }

    /// Suspends pulses without discarding tree progress.
    pub fn pause(&mut self) {
        if self.state == RunState::Started {
            info!("scheduler paused");
            self.state = RunState::Paused;
        }
    }

    /// Returns to idle and discards all tree progress.
    pub fn stop(&mut self) {
        info!(pulses = self.pulses, "scheduler stopped");
        self.state = RunState::Idle;
        self.tree.reset();
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Pulses that actually ran the tree.
    pub fn pulses(&self) -> u64 {
        self.pulses
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    /// Runs the tree once if started and ready.
    ///
    /// Returns the tree's status, or `None` when the pulse was skipped.
    pub fn pulse(&mut self) -> Option<Status> {
        if self.state != RunState::Started {
            trace!(state = %self.state, "pulse skipped");
            return None;
        }
        if !self.ctx.is_ready() {
            trace!("pulse skipped; host not ready");
            return None;
        }

        self.ctx.advance();
        let status = self.tree.run(&mut self.ctx);
        self.pulses += 1;
        debug!(pulse = self.pulses, now = self.ctx.now(), %status, "pulse");
        Some(status)
    }

    /// Pulses every `period`, stopping after `max_pulses` attempts if set.
    ///
    /// Returns the number of attempts made.
    pub async fn drive(&mut self, period: Duration, max_pulses: Option<u64>) -> u64 {
        let mut interval = tokio::time::interval(period);
        let mut attempts = 0u64;

        while max_pulses.is_none_or(|max| attempts < max) {
            interval.tick().await;
            self.pulse();
            attempts += 1;
        }

        attempts
    }
}

#[cfg(test)]
mod tests {
    use behavior_tree::{ManualClock, Tick};

    use super::*;

    #[derive(Default)]
    struct World {
        clock: ManualClock,
        loading: bool,
        actions: u32,
    }

    impl Clock for World {
        fn now(&self) -> Tick {
            self.clock.now()
        }
    }

    impl Host for World {
        fn advance(&mut self) {
            self.clock.advance(1);
        }

        fn is_ready(&self) -> bool {
            !self.loading
        }
    }

    fn scheduler() -> Scheduler<World> {
        let tree = BehaviorTree::<World>::builder()
            .sequence()
            .succeed_with(|world: &mut World| world.actions += 1)
            .sleep(2)
            .end()
            .build()
            .expect("tree should build");
        Scheduler::new(tree, World::default())
    }

    #[test]
    fn skips_pulses_until_started() {
        let mut scheduler = scheduler();

        assert_eq!(scheduler.pulse(), None);
        assert_eq!(scheduler.context().actions, 0);

        scheduler.start();
        assert_eq!(scheduler.pulse(), Some(Status::Sleeping));
        assert_eq!(scheduler.context().actions, 1);
        assert_eq!(scheduler.context().now(), 1);
    }

    #[test]
    fn pause_keeps_progress() {
        let mut scheduler = scheduler();
        scheduler.start();
        scheduler.pulse();

        scheduler.pause();
        assert_eq!(scheduler.state(), RunState::Paused);
        assert_eq!(scheduler.pulse(), None);
        assert_eq!(scheduler.context().now(), 1);

        // The sleep started at tick 1 and is still pending.
        scheduler.start();
        assert_eq!(scheduler.pulse(), Some(Status::Sleeping));
        assert_eq!(scheduler.pulse(), Some(Status::Success));
        assert_eq!(scheduler.context().actions, 1);
    }

    #[test]
    fn stop_discards_progress() {
        let mut scheduler = scheduler();
        scheduler.start();
        scheduler.pulse();

        scheduler.stop();
        assert_eq!(scheduler.state(), RunState::Idle);
        scheduler.start();
        scheduler.pulse();
        assert_eq!(scheduler.context().actions, 2);
    }

    #[test]
    fn skips_pulses_while_host_not_ready() {
        let mut scheduler = scheduler();
        scheduler.start();
        scheduler.context_mut().loading = true;

        assert_eq!(scheduler.pulse(), None);
        assert_eq!(scheduler.pulses(), 0);

        scheduler.context_mut().loading = false;
        assert!(scheduler.pulse().is_some());
        assert_eq!(scheduler.pulses(), 1);
    }

    #[tokio::test]
    async fn drive_honors_pulse_budget() {
        let mut scheduler = scheduler();
        scheduler.start();

        let attempts = scheduler.drive(Duration::from_millis(1), Some(4)).await;
        assert_eq!(attempts, 4);
        assert_eq!(scheduler.pulses(), 4);
        assert_eq!(scheduler.context().now(), 4);
    }
}
