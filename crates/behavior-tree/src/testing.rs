//! Shared fixtures for unit tests.

use std::collections::VecDeque;

use crate::{Clock, ManualClock, Node, Status, Tick};

#[derive(Debug, Default)]
pub(crate) struct TestContext {
    pub clock: ManualClock,
    pub log: Vec<&'static str>,
    pub value: i32,
}

impl TestContext {
    pub fn at(tick: Tick) -> Self {
        Self {
            clock: ManualClock::at(tick),
            ..Default::default()
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.log.iter().filter(|entry| **entry == name).count()
    }
}

impl Clock for TestContext {
    fn now(&self) -> Tick {
        self.clock.now()
    }
}

/// Action that logs `name` and plays back `script`, repeating its last entry.
pub(crate) fn scripted(
    name: &'static str,
    script: impl IntoIterator<Item = Status>,
) -> Node<TestContext> {
    let mut script: VecDeque<Status> = script.into_iter().collect();
    let mut last = Status::Success;
    Node::action(name, move |ctx: &mut TestContext| {
        ctx.log.push(name);
        if let Some(next) = script.pop_front() {
            last = next;
        }
        last
    })
}

/// Action that logs `name` and always returns `status`.
pub(crate) fn always(name: &'static str, status: Status) -> Node<TestContext> {
    scripted(name, [status])
}
