//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child nodes:
//! [`Sequence`] (AND logic), [`Selector`] (OR logic), [`RandomSelector`]
//! (OR logic in shuffled order) and [`Parallel`] (every child, every step).
//!
//! # Resumption
//!
//! Sequence and selectors remember which child was pending and resume there
//! on the next step; children that already resolved are not stepped again.
//! A child that resolves synchronously hands over to the next child within
//! the same step, so a sequence of instant leaves completes in one step.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Behavior, Node, Status};

/// The four composite kinds, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CompositeKind {
    Sequence,
    Selector,
    RandomSelector,
    Parallel,
}

/// How many children must reach an outcome for a [`Parallel`] to adopt it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Policy {
    /// A single child reaching the outcome suffices.
    RequireOne,
    /// Every child must reach the outcome.
    RequireAll,
}

impl Policy {
    fn satisfied(self, statuses: &[Status], target: Status) -> bool {
        let mut hits = statuses.iter().map(|status| *status == target);
        match self {
            Policy::RequireOne => hits.any(|hit| hit),
            Policy::RequireAll => hits.all(|hit| hit),
        }
    }
}

/// Executes children in order until one fails.
///
/// # Semantics
///
/// Starting from the remembered resume index:
/// - If a child returns `Failure`, the sequence **stops**, rewinds to the
///   first child and returns `Failure`
/// - If a child returns `Running` or `Sleeping`, the sequence **stops**,
///   remembers the child and returns that status unchanged
/// - If a child returns `Success`, the sequence **continues** with the next
///   child in the same step
/// - If the last child succeeds, the sequence rewinds and returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Node<C>>,
    current: usize,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given children.
    ///
    /// An empty sequence succeeds immediately.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            current: 0,
        }
    }

    /// Appends a child after the existing ones.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    /// The child the next step resumes from.
    pub fn resume_index(&self) -> usize {
        self.current
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while let Some(child) = self.children.get_mut(self.current) {
            match child.tick(ctx) {
                Status::Success => self.current += 1,
                Status::Failure => {
                    self.current = 0;
                    return Status::Failure;
                }
                pending => return pending,
            }
        }

        self.current = 0;
        Status::Success
    }

    fn reset(&mut self) {
        self.current = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Executes children in order until one succeeds.
///
/// # Semantics
///
/// Starting from the remembered resume index:
/// - If a child returns `Success`, the selector **stops**, rewinds and
///   returns `Success`
/// - If a child returns `Running` or `Sleeping`, the selector **stops**,
///   remembers the child and returns that status unchanged
/// - If a child returns `Failure`, the selector **continues** with the next
///   child in the same step
/// - If every child fails, the selector rewinds and returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    children: Vec<Node<C>>,
    current: usize,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given children.
    ///
    /// An empty selector fails immediately.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            current: 0,
        }
    }

    /// Appends a child after the existing ones.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    /// The child the next step resumes from.
    pub fn resume_index(&self) -> usize {
        self.current
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while let Some(child) = self.children.get_mut(self.current) {
            match child.tick(ctx) {
                Status::Success => {
                    self.current = 0;
                    return Status::Success;
                }
                Status::Failure => self.current += 1,
                pending => return pending,
            }
        }

        self.current = 0;
        Status::Failure
    }

    fn reset(&mut self) {
        self.current = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// A [`Selector`] that tries its children in a random order.
///
/// A new permutation is drawn when a fresh evaluation begins (first step,
/// or the step after a terminal result). While a child is pending the
/// permutation is kept, so resuming never reshuffles.
pub struct RandomSelector<C> {
    children: Vec<Node<C>>,
    order: Vec<usize>,
    current: usize,
    active: bool,
    rng: StdRng,
}

impl<C> RandomSelector<C> {
    /// Creates a random selector drawing permutations from `rng`.
    pub fn new(children: Vec<Node<C>>, rng: StdRng) -> Self {
        Self {
            children,
            order: Vec::new(),
            current: 0,
            active: false,
            rng,
        }
    }

    /// Appends a child after the existing ones.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    /// The permutation of the current evaluation.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    fn finish(&mut self, status: Status) -> Status {
        self.current = 0;
        self.active = false;
        status
    }
}

impl<C> Behavior<C> for RandomSelector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if !self.active {
            self.order.clear();
            self.order.extend(0..self.children.len());
            self.order.shuffle(&mut self.rng);
            self.current = 0;
            self.active = true;
        }

        while let Some(&index) = self.order.get(self.current) {
            match self.children[index].tick(ctx) {
                Status::Success => return self.finish(Status::Success),
                Status::Failure => self.current += 1,
                pending => return pending,
            }
        }

        self.finish(Status::Failure)
    }

    fn reset(&mut self) {
        self.current = 0;
        self.active = false;
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Steps every child on every step and combines the results by policy.
///
/// # Semantics
///
/// - Each step, every child is stepped, including children that resolved on
///   an earlier step; policies are judged on the latest statuses
/// - The failure policy is checked first, then the success policy
/// - When either is met, every child is reset and the outcome returned
/// - If every child is terminal this step and neither policy is met, the
///   parallel fails and resets its children
/// - Otherwise returns `Running` if any child is running, else `Sleeping`
///
/// "Parallel" is logical concurrency within one synchronous step; no threads
/// are involved.
pub struct Parallel<C> {
    children: Vec<Node<C>>,
    statuses: Vec<Status>,
    success: Policy,
    failure: Policy,
}

impl<C> Parallel<C> {
    /// Creates a parallel node with explicit policies.
    pub fn new(children: Vec<Node<C>>, success: Policy, failure: Policy) -> Self {
        Self {
            children,
            statuses: Vec::new(),
            success,
            failure,
        }
    }

    /// Appends a child after the existing ones.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    /// The configured success and failure policies.
    pub fn policies(&self) -> (Policy, Policy) {
        (self.success, self.failure)
    }

    /// Child statuses from the latest unresolved step, in child order.
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    fn finish(&mut self, status: Status) -> Status {
        self.reset();
        status
    }
}

impl<C> Behavior<C> for Parallel<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.children.is_empty() {
            return Status::Success;
        }

        self.statuses.clear();
        for child in &mut self.children {
            self.statuses.push(child.tick(ctx));
        }

        if self.failure.satisfied(&self.statuses, Status::Failure) {
            return self.finish(Status::Failure);
        }
        if self.success.satisfied(&self.statuses, Status::Success) {
            return self.finish(Status::Success);
        }
        if self.statuses.iter().all(|status| status.is_terminal()) {
            return self.finish(Status::Failure);
        }

        if self.statuses.contains(&Status::Running) {
            Status::Running
        } else {
            Status::Sleeping
        }
    }

    fn reset(&mut self) {
        self.statuses.clear();
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Every kind of composite the engine knows about.
pub enum Composite<C> {
    Sequence(Sequence<C>),
    Selector(Selector<C>),
    RandomSelector(RandomSelector<C>),
    Parallel(Parallel<C>),
}

impl<C> Composite<C> {
    /// Which kind of composite this is.
    pub fn kind(&self) -> CompositeKind {
        match self {
            Composite::Sequence(_) => CompositeKind::Sequence,
            Composite::Selector(_) => CompositeKind::Selector,
            Composite::RandomSelector(_) => CompositeKind::RandomSelector,
            Composite::Parallel(_) => CompositeKind::Parallel,
        }
    }

    /// Appends a child after the existing ones.
    pub fn push(&mut self, child: Node<C>) {
        match self {
            Composite::Sequence(node) => node.push(child),
            Composite::Selector(node) => node.push(child),
            Composite::RandomSelector(node) => node.push(child),
            Composite::Parallel(node) => node.push(child),
        }
    }

    /// The children in declaration order.
    pub fn children(&self) -> &[Node<C>] {
        match self {
            Composite::Sequence(node) => &node.children,
            Composite::Selector(node) => &node.children,
            Composite::RandomSelector(node) => &node.children,
            Composite::Parallel(node) => &node.children,
        }
    }
}

impl<C> Behavior<C> for Composite<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self {
            Composite::Sequence(node) => node.tick(ctx),
            Composite::Selector(node) => node.tick(ctx),
            Composite::RandomSelector(node) => node.tick(ctx),
            Composite::Parallel(node) => node.tick(ctx),
        }
    }

    fn reset(&mut self) {
        match self {
            Composite::Sequence(node) => node.reset(),
            Composite::Selector(node) => node.reset(),
            Composite::RandomSelector(node) => node.reset(),
            Composite::Parallel(node) => node.reset(),
        }
    }
}
