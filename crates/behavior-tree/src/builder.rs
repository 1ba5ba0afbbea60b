//! Fluent, declaration-ordered tree construction.
//!
//! The [`Builder`] turns a linear sequence of declarations into a single
//! validated tree using two stacks:
//!
//! - **Open scopes**: composites whose `end()` has not been seen yet
//! - **Pending items**: decorators waiting for a node to wrap, and finished
//!   standalone nodes waiting to become the root
//!
//! # Resolution Rules
//!
//! - Opening a composite captures the decorators declared right before it;
//!   they wrap the composite when its scope closes
//! - Declaring a decorator pushes it onto the pending stack
//! - Declaring a leaf pops pending decorators off the top of the stack, each
//!   wrapping the node produced so far, so the first-declared decorator ends
//!   up outermost
//! - A finished node joins the innermost open scope as its next child, or
//!   becomes a root candidate if no scope is open
//!
//! ```rust,ignore
//! let tree = BehaviorTree::<Guard>::builder()
//!     .selector()
//!         .sequence()
//!             .condition(|g| g.sees_intruder)
//!             .retry(3)
//!             .action(|g| g.raise_alarm())
//!         .end()
//!         .invert()
//!         .condition(|g| g.on_break)
//!     .end()
//!     .build()?;
//! ```
//!
//! Building fails atomically: the first malformed declaration is remembered
//! and reported by [`Builder::build`], and no tree is produced.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::{Clock, ClockFn, Tick};
use crate::composite::{Composite, Parallel, Policy, RandomSelector, Selector, Sequence};
use crate::config::TreeConfig;
use crate::decorator::{
    Chance, Cooldown, Inverter, Limit, Repeater, RetryUntilSuccess, SleepUntilSuccess,
    SuccessRate,
};
use crate::error::{BuildError, Result};
use crate::leaf::{Action, Condition, Sleep, SleepUntil, SleepWhile};
use crate::subtree::{DynamicSubTree, SubTree};
use crate::{Behavior, BehaviorTree, Node, Status};

/// A decorator declared but not yet attached to a child.
enum Wrap<C> {
    Invert,
    Repeat(Limit),
    Retry(Limit),
    Cooldown { ticks: Tick, clock: ClockFn<C> },
    SuccessRate { chance: Chance, rng: StdRng },
    SleepUntilSuccess { duration: Tick, clock: ClockFn<C> },
}

impl<C> Wrap<C> {
    fn name(&self) -> &'static str {
        match self {
            Wrap::Invert => "invert",
            Wrap::Repeat(_) => "repeat",
            Wrap::Retry(_) => "retry",
            Wrap::Cooldown { .. } => "cooldown",
            Wrap::SuccessRate { .. } => "success_rate",
            Wrap::SleepUntilSuccess { .. } => "sleep_until_success",
        }
    }

    fn wrap(self, child: Node<C>) -> Node<C> {
        match self {
            Wrap::Invert => Inverter::new(child).into(),
            Wrap::Repeat(limit) => Repeater::new(child, limit).into(),
            Wrap::Retry(limit) => RetryUntilSuccess::new(child, limit).into(),
            Wrap::Cooldown { ticks, clock } => Cooldown::with_clock(child, ticks, clock).into(),
            Wrap::SuccessRate { chance, rng } => SuccessRate::new(child, chance, rng).into(),
            Wrap::SleepUntilSuccess { duration, clock } => {
                SleepUntilSuccess::with_clock(child, duration, clock).into()
            }
        }
    }
}

enum Pending<C> {
    Decorator(Wrap<C>),
    Root(Node<C>),
}

struct Scope<C> {
    composite: Composite<C>,
    /// Decorators declared before the composite, innermost first.
    wraps: Vec<Wrap<C>>,
    /// Height of the pending stack when the scope opened.
    mark: usize,
}

/// Assembles a [`BehaviorTree`] from a linear sequence of declarations.
pub struct Builder<C> {
    scopes: Vec<Scope<C>>,
    pending: Vec<Pending<C>>,
    config: TreeConfig,
    rng: StdRng,
    error: Option<BuildError>,
}

impl<C> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Builder<C> {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Creates a builder whose random nodes and run policy follow `config`.
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            scopes: Vec::new(),
            pending: Vec::new(),
            rng: config.rng(),
            config,
            error: None,
        }
    }

    // ------------------------------------------------------------------------
    // Composites
    // ------------------------------------------------------------------------

    /// Opens a sequence: every child must succeed.
    pub fn sequence(self) -> Self {
        self.open(Composite::Sequence(Sequence::new(Vec::new())))
    }

    /// Opens a selector: the first child to succeed wins.
    pub fn selector(self) -> Self {
        self.open(Composite::Selector(Selector::new(Vec::new())))
    }

    /// Opens a selector that tries its children in random order.
    pub fn random_selector(mut self) -> Self {
        let rng = self.fork_rng();
        self.open(Composite::RandomSelector(RandomSelector::new(Vec::new(), rng)))
    }

    /// Opens a parallel with the default policies: all children must
    /// succeed, and one failure fails the whole.
    pub fn parallel(self) -> Self {
        self.parallel_with(Policy::RequireAll, Policy::RequireOne)
    }

    /// Opens a parallel with explicit success and failure policies.
    pub fn parallel_with(self, success: Policy, failure: Policy) -> Self {
        self.open(Composite::Parallel(Parallel::new(Vec::new(), success, failure)))
    }

    /// Closes the innermost open composite.
    pub fn end(mut self) -> Self {
        let Some(scope) = self.scopes.pop() else {
            self.fail(BuildError::UnbalancedEnd);
            return self;
        };

        if self.pending.len() > scope.mark {
            let decorator = self.top_decorator_name();
            self.fail(BuildError::DanglingDecorator { decorator });
            return self;
        }

        if scope.composite.children().is_empty() {
            self.fail(BuildError::EmptyComposite {
                kind: scope.composite.kind(),
            });
            return self;
        }

        let node = scope
            .wraps
            .into_iter()
            .fold(Node::Composite(scope.composite), |node, wrap| wrap.wrap(node));
        self.attach(node);
        self
    }

    // ------------------------------------------------------------------------
    // Leaves
    // ------------------------------------------------------------------------

    /// Adds an action returning its own status.
    pub fn action(self, action: impl FnMut(&mut C) -> Status + 'static) -> Self {
        self.action_named("action", action)
    }

    /// Adds a named action returning its own status.
    pub fn action_named(
        self,
        name: impl Into<String>,
        action: impl FnMut(&mut C) -> Status + 'static,
    ) -> Self {
        self.add(Action::new(name, action).into())
    }

    /// Adds a condition.
    pub fn condition(self, predicate: impl FnMut(&mut C) -> bool + 'static) -> Self {
        self.condition_named("condition", predicate)
    }

    /// Adds a named condition.
    pub fn condition_named(
        self,
        name: impl Into<String>,
        predicate: impl FnMut(&mut C) -> bool + 'static,
    ) -> Self {
        self.add(Condition::new(name, predicate).into())
    }

    /// Adds an action that always succeeds.
    pub fn succeed(self) -> Self {
        self.action_named("succeed", |_| Status::Success)
    }

    /// Adds a side effect followed by `Success`.
    pub fn succeed_with(self, mut effect: impl FnMut(&mut C) + 'static) -> Self {
        self.action_named("succeed", move |ctx| {
            effect(ctx);
            Status::Success
        })
    }

    /// Adds a side effect followed by `Failure`.
    pub fn fail_with(self, mut effect: impl FnMut(&mut C) + 'static) -> Self {
        self.action_named("fail", move |ctx| {
            effect(ctx);
            Status::Failure
        })
    }

    /// Adds a leaf that logs `message` at info level and succeeds.
    pub fn log_info(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.action_named("log_info", move |_| {
            tracing::info!("{message}");
            Status::Success
        })
    }

    /// Adds a leaf that logs a message computed from the context and succeeds.
    pub fn log_info_with(self, mut message: impl FnMut(&C) -> String + 'static) -> Self {
        self.action_named("log_info", move |ctx| {
            tracing::info!("{}", message(ctx));
            Status::Success
        })
    }

    /// Binds a prebuilt tree as a child.
    pub fn subtree(self, name: impl Into<String>, tree: BehaviorTree<C>) -> Self {
        self.add(SubTree::new(name, tree).into())
    }

    /// Binds the tree produced by `supplier`, which is called once, now.
    pub fn subtree_with(
        self,
        name: impl Into<String>,
        supplier: impl FnOnce() -> BehaviorTree<C>,
    ) -> Self {
        let tree = supplier();
        self.subtree(name, tree)
    }

    /// Adds a child that asks `resolver` for a fresh tree on every new
    /// evaluation.
    pub fn dynamic_subtree(
        self,
        name: impl Into<String>,
        resolver: impl FnMut(&C) -> BehaviorTree<C> + 'static,
    ) -> Self {
        self.add(DynamicSubTree::new(name, resolver).into())
    }

    /// Adds an already assembled node.
    pub fn node(self, node: impl Into<Node<C>>) -> Self {
        self.add(node.into())
    }

    /// Adds a user-defined behavior; its lifecycle hooks are honored.
    pub fn behavior(self, behavior: impl Behavior<C> + 'static) -> Self {
        self.add(Node::custom(behavior))
    }

    // ------------------------------------------------------------------------
    // Decorators
    // ------------------------------------------------------------------------

    /// Inverts the next node.
    pub fn invert(self) -> Self {
        self.decorate(Wrap::Invert)
    }

    /// Repeats the next node until it has succeeded `times` times.
    pub fn repeat(self, times: u32) -> Self {
        self.decorate(Wrap::Repeat(Limit::Times(times)))
    }

    /// Repeats the next node until it fails.
    pub fn repeat_forever(self) -> Self {
        self.decorate(Wrap::Repeat(Limit::Forever))
    }

    /// Retries the next node up to `attempts` times until it succeeds.
    pub fn retry(self, attempts: u32) -> Self {
        self.decorate(Wrap::Retry(Limit::Times(attempts)))
    }

    /// Retries the next node until it succeeds.
    pub fn retry_forever(self) -> Self {
        self.decorate(Wrap::Retry(Limit::Forever))
    }

    /// Keeps each success of the next node with probability `chance`.
    pub fn success_rate(mut self, chance: f64) -> Self {
        match Chance::new(chance) {
            Ok(chance) => {
                let rng = self.fork_rng();
                self.decorate(Wrap::SuccessRate { chance, rng })
            }
            Err(error) => {
                self.fail(error);
                self
            }
        }
    }

    /// Like [`success_rate`](Self::success_rate), evaluating `chance` once, now.
    pub fn success_rate_with(self, chance: impl FnOnce() -> f64) -> Self {
        let chance = chance();
        self.success_rate(chance)
    }

    /// Splices a reusable fragment of declarations.
    pub fn apply(self, fragment: impl FnOnce(Self) -> Self) -> Self {
        fragment(self)
    }

    /// Validates the declarations and produces the tree.
    ///
    /// # Errors
    ///
    /// Fails if a declaration was malformed, a composite scope is still
    /// open, a decorator has nothing to wrap, or anything other than exactly
    /// one root node remains.
    pub fn build(mut self) -> Result<BehaviorTree<C>> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        if !self.scopes.is_empty() {
            return Err(BuildError::UnclosedComposite {
                open: self.scopes.len(),
            });
        }

        if matches!(self.pending.last(), Some(Pending::Decorator(_))) {
            return Err(BuildError::DanglingDecorator {
                decorator: self.top_decorator_name(),
            });
        }

        let count = self.pending.len();
        match self.pending.pop() {
            Some(Pending::Root(root)) if count == 1 => {
                tracing::debug!(
                    max_run_steps = ?self.config.max_run_steps,
                    "behavior tree built"
                );
                Ok(BehaviorTree::with_config(root, &self.config))
            }
            None => Err(BuildError::NoRoot),
            Some(_) => Err(BuildError::MultipleRoots { count }),
        }
    }

    // ------------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------------

    fn open(mut self, composite: Composite<C>) -> Self {
        let wraps = self.take_wraps();
        let mark = self.pending.len();
        self.scopes.push(Scope {
            composite,
            wraps,
            mark,
        });
        self
    }

    fn decorate(mut self, wrap: Wrap<C>) -> Self {
        self.pending.push(Pending::Decorator(wrap));
        self
    }

    fn add(mut self, node: Node<C>) -> Self {
        let node = self
            .take_wraps()
            .into_iter()
            .fold(node, |node, wrap| wrap.wrap(node));
        self.attach(node);
        self
    }

    /// Pops the decorators declared since the last node, innermost first.
    fn take_wraps(&mut self) -> Vec<Wrap<C>> {
        let floor = self.scopes.last().map_or(0, |scope| scope.mark);
        let mut wraps = Vec::new();
        while self.pending.len() > floor {
            match self.pending.pop() {
                Some(Pending::Decorator(wrap)) => wraps.push(wrap),
                Some(root @ Pending::Root(_)) => {
                    self.pending.push(root);
                    break;
                }
                None => break,
            }
        }
        wraps
    }

    fn attach(&mut self, node: Node<C>) {
        match self.scopes.last_mut() {
            Some(scope) => scope.composite.push(node),
            None => self.pending.push(Pending::Root(node)),
        }
    }

    fn top_decorator_name(&self) -> &'static str {
        match self.pending.last() {
            Some(Pending::Decorator(wrap)) => wrap.name(),
            _ => "unknown",
        }
    }

    fn fork_rng(&mut self) -> StdRng {
        StdRng::seed_from_u64(self.rng.r#gen())
    }

    fn fail(&mut self, error: BuildError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

/// Timed declarations, available when the context carries a [`Clock`].
impl<C: Clock> Builder<C> {
    /// Adds a leaf that sleeps for `duration` ticks, then succeeds.
    pub fn sleep(self, duration: Tick) -> Self {
        self.add(Sleep::new(duration).into())
    }

    /// Adds a leaf that sleeps until `predicate` holds, failing after
    /// `duration` ticks.
    pub fn sleep_until(
        self,
        predicate: impl FnMut(&mut C) -> bool + 'static,
        duration: Tick,
    ) -> Self {
        self.add(SleepUntil::new(predicate, duration).into())
    }

    /// Adds a leaf that sleeps while `predicate` holds, failing after
    /// `duration` ticks.
    pub fn sleep_while(
        self,
        predicate: impl FnMut(&mut C) -> bool + 'static,
        duration: Tick,
    ) -> Self {
        self.add(SleepWhile::new(predicate, duration).into())
    }

    /// Steps the next node until it succeeds, failing after `duration` ticks.
    ///
    /// Unlike [`sleep_until`](Self::sleep_until) this is a decorator: the
    /// wrapped node plays the role of the predicate.
    pub fn sleep_until_success(self, duration: Tick) -> Self {
        self.decorate(Wrap::SleepUntilSuccess {
            duration,
            clock: C::now,
        })
    }

    /// Blocks the next node for `ticks` ticks after each terminal result.
    pub fn cooldown(self, ticks: Tick) -> Self {
        self.decorate(Wrap::Cooldown {
            ticks,
            clock: C::now,
        })
    }

    /// Like [`cooldown`](Self::cooldown), evaluating `ticks` once, now.
    pub fn cooldown_with(self, ticks: impl FnOnce() -> Tick) -> Self {
        let ticks = ticks();
        self.cooldown(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestContext, always, scripted};

    type TestBuilder = Builder<TestContext>;

    fn log(name: &'static str, status: Status) -> impl FnMut(&mut TestContext) -> Status {
        move |ctx| {
            ctx.log.push(name);
            status
        }
    }

    #[test]
    fn builds_nested_composites_in_declaration_order() {
        let mut tree = TestBuilder::new()
            .sequence()
            .action(log("a", Status::Success))
            .selector()
            .action(log("b", Status::Failure))
            .action(log("c", Status::Success))
            .end()
            .action(log("d", Status::Success))
            .end()
            .build()
            .expect("valid tree");

        let mut ctx = TestContext::default();
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.log, ["a", "b", "c", "d"]);
    }

    #[test]
    fn single_leaf_is_a_valid_root() {
        let mut tree = TestBuilder::new().succeed().build().expect("valid tree");
        assert_eq!(tree.tick(&mut TestContext::default()), Status::Success);
    }

    #[test]
    fn first_declared_decorator_is_outermost() {
        // invert(retry(2, leaf)): the retry absorbs one failure, then the
        // inverter flips the final failure into success.
        let mut tree = TestBuilder::new()
            .invert()
            .retry(2)
            .action(log("a", Status::Failure))
            .build()
            .expect("valid tree");

        let root = tree.root();
        let Node::Decorator(crate::Decorator::Inverter(_)) = root else {
            panic!("inverter should be the root");
        };

        let mut ctx = TestContext::default();
        assert_eq!(tree.tick(&mut ctx), Status::Running);
        assert_eq!(tree.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn decorators_wrap_the_following_composite() {
        let mut tree = TestBuilder::new()
            .invert()
            .sequence()
            .action(log("a", Status::Success))
            .action(log("b", Status::Success))
            .end()
            .build()
            .expect("valid tree");

        let mut ctx = TestContext::default();
        assert_eq!(tree.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.log, ["a", "b"]);
    }

    #[test]
    fn decorator_inside_scope_wraps_next_child_only() {
        let mut tree = TestBuilder::new()
            .sequence()
            .invert()
            .action(log("a", Status::Failure))
            .action(log("b", Status::Success))
            .end()
            .build()
            .expect("valid tree");

        let mut ctx = TestContext::default();
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.log, ["a", "b"]);
    }

    #[test]
    fn unclosed_scope_fails_build() {
        let result = TestBuilder::new().sequence().succeed().build();
        assert_eq!(
            result.err(),
            Some(BuildError::UnclosedComposite { open: 1 })
        );
    }

    #[test]
    fn two_roots_fail_build() {
        let result = TestBuilder::new().succeed().succeed().build();
        assert_eq!(result.err(), Some(BuildError::MultipleRoots { count: 2 }));
    }

    #[test]
    fn empty_builder_fails_build() {
        assert_eq!(TestBuilder::new().build().err(), Some(BuildError::NoRoot));
    }

    #[test]
    fn stray_end_fails_build() {
        let result = TestBuilder::new().succeed().end().build();
        assert_eq!(result.err(), Some(BuildError::UnbalancedEnd));
    }

    #[test]
    fn empty_composite_fails_build() {
        let result = TestBuilder::new().selector().end().build();
        assert_eq!(
            result.err(),
            Some(BuildError::EmptyComposite {
                kind: crate::CompositeKind::Selector
            })
        );
    }

    #[test]
    fn trailing_decorator_fails_build() {
        let result = TestBuilder::new().succeed().invert().build();
        assert_eq!(
            result.err(),
            Some(BuildError::DanglingDecorator { decorator: "invert" })
        );
    }

    #[test]
    fn decorator_before_end_fails_build() {
        let result = TestBuilder::new()
            .sequence()
            .succeed()
            .repeat(2)
            .end()
            .build();
        assert_eq!(
            result.err(),
            Some(BuildError::DanglingDecorator { decorator: "repeat" })
        );
    }

    #[test]
    fn invalid_chance_fails_build() {
        let result = TestBuilder::new().success_rate(1.5).succeed().build();
        assert_eq!(
            result.err(),
            Some(BuildError::InvalidChance { chance: 1.5 })
        );
    }

    #[test]
    fn first_error_wins() {
        let result = TestBuilder::new().end().success_rate(-1.0).build();
        assert_eq!(result.err(), Some(BuildError::UnbalancedEnd));
    }

    fn guard_fragment(builder: TestBuilder) -> TestBuilder {
        builder
            .sequence()
            .action(log("check", Status::Success))
            .action(log("act", Status::Success))
            .end()
    }

    #[test]
    fn apply_splices_fragments() {
        let mut tree = TestBuilder::new()
            .selector()
            .action(log("first", Status::Failure))
            .apply(guard_fragment)
            .end()
            .build()
            .expect("valid tree");

        let mut ctx = TestContext::default();
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.log, ["first", "check", "act"]);
    }

    #[test]
    fn timed_leaves_and_decorators() {
        let mut tree = TestBuilder::new()
            .sequence()
            .sleep(2)
            .cooldown(5)
            .action(log("strike", Status::Success))
            .end()
            .build()
            .expect("valid tree");

        let mut ctx = TestContext::at(0);
        assert_eq!(tree.tick(&mut ctx), Status::Sleeping);
        ctx.clock.set(2);
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.count("strike"), 1);

        // Sleep restarts, then the cooldown gates the strike until tick 7.
        ctx.clock.set(4);
        assert_eq!(tree.tick(&mut ctx), Status::Sleeping);
        ctx.clock.set(6);
        assert_eq!(tree.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.count("strike"), 1);
    }

    #[test]
    fn sleep_until_leaf_and_decorator_are_distinct() {
        let mut tree = TestBuilder::new()
            .sequence()
            .sleep_until(|ctx: &mut TestContext| ctx.value > 0, 10)
            .sleep_until_success(10)
            .condition(|ctx: &mut TestContext| ctx.value > 1)
            .end()
            .build()
            .expect("valid tree");

        let mut ctx = TestContext::at(0);
        assert_eq!(tree.tick(&mut ctx), Status::Sleeping);
        ctx.value = 1;
        assert_eq!(tree.tick(&mut ctx), Status::Sleeping);
        ctx.value = 2;
        assert_eq!(tree.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn seeded_builders_shuffle_identically() {
        let build = || {
            Builder::<TestContext>::with_config(TreeConfig::default().with_seed(11))
                .random_selector()
                .node(always("a", Status::Failure))
                .node(always("b", Status::Failure))
                .node(always("c", Status::Failure))
                .node(always("d", Status::Failure))
                .end()
                .build()
                .expect("valid tree")
        };

        let mut first = TestContext::default();
        let mut second = TestContext::default();
        build().tick(&mut first);
        build().tick(&mut second);
        assert_eq!(first.log, second.log);
    }

    #[test]
    fn parallel_defaults_require_all_successes() {
        let mut tree = TestBuilder::new()
            .parallel()
            .node(scripted("a", [Status::Running, Status::Success]))
            .node(always("b", Status::Success))
            .end()
            .build()
            .expect("valid tree");

        let mut ctx = TestContext::default();
        assert_eq!(tree.tick(&mut ctx), Status::Running);
        assert_eq!(tree.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn subtrees_compose_independent_trees() {
        let nested = TestBuilder::new()
            .sequence()
            .action(log("inner", Status::Success))
            .end()
            .build()
            .expect("valid tree");

        let mut tree = TestBuilder::new()
            .sequence()
            .subtree("inner", nested)
            .subtree_with("lazy", || BehaviorTree::new(always("made", Status::Success)))
            .dynamic_subtree("dynamic", |_: &TestContext| {
                BehaviorTree::new(always("resolved", Status::Success))
            })
            .end()
            .build()
            .expect("valid tree");

        let mut ctx = TestContext::default();
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.log, ["inner", "made", "resolved"]);
    }

    #[test]
    fn sugar_leaves() {
        let mut tree = TestBuilder::new()
            .selector()
            .fail_with(|ctx: &mut TestContext| ctx.value += 1)
            .log_info("falling back")
            .end()
            .build()
            .expect("valid tree");

        let mut ctx = TestContext::default();
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);

        let mut tree = TestBuilder::new()
            .succeed_with(|ctx: &mut TestContext| ctx.value = 10)
            .build()
            .expect("valid tree");
        assert_eq!(tree.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 10);
    }

    #[test]
    fn supplier_parameters_are_read_once() {
        let mut tree = TestBuilder::new()
            .success_rate_with(|| 0.0)
            .cooldown_with(|| 3)
            .succeed()
            .build()
            .expect("valid tree");

        assert_eq!(tree.tick(&mut TestContext::at(0)), Status::Failure);
    }
}
