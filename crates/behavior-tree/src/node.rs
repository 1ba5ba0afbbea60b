//! The tagged node variant every tree is made of.
//!
//! Trees are built from [`Node`] values rather than open trait objects, so
//! stepping and resetting is an exhaustive `match` over a closed set of
//! kinds. User-defined behaviors still fit in through [`Leaf::Custom`].

use crate::composite::{Composite, Parallel, RandomSelector, Selector, Sequence};
use crate::decorator::{
    Cooldown, Decorator, Inverter, Repeater, RetryUntilSuccess, SleepUntilSuccess, SuccessRate,
};
use crate::leaf::{Action, Condition, Custom, Leaf, Sleep, SleepUntil, SleepWhile};
use crate::subtree::{DynamicSubTree, SubTree};
use crate::{Behavior, Status};

/// A tree element.
pub enum Node<C> {
    /// Terminal node wrapping a callable, timing state, or custom behavior.
    Leaf(Leaf<C>),
    /// Node owning an ordered list of children.
    Composite(Composite<C>),
    /// Node owning exactly one child.
    Decorator(Decorator<C>),
    /// Delegates to a nested tree bound once.
    SubTree(SubTree<C>),
    /// Delegates to a nested tree re-resolved at runtime.
    DynamicSubTree(DynamicSubTree<C>),
}

impl<C> Node<C> {
    /// Creates an action leaf.
    pub fn action(
        name: impl Into<String>,
        action: impl FnMut(&mut C) -> Status + 'static,
    ) -> Self {
        Action::new(name, action).into()
    }

    /// Creates a condition leaf.
    pub fn condition(
        name: impl Into<String>,
        predicate: impl FnMut(&mut C) -> bool + 'static,
    ) -> Self {
        Condition::new(name, predicate).into()
    }

    /// Wraps a user-defined behavior as a leaf.
    pub fn custom(behavior: impl Behavior<C> + 'static) -> Self {
        Custom::new(behavior).into()
    }
}

impl<C> Behavior<C> for Node<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self {
            Node::Leaf(node) => node.tick(ctx),
            Node::Composite(node) => node.tick(ctx),
            Node::Decorator(node) => node.tick(ctx),
            Node::SubTree(node) => node.tick(ctx),
            Node::DynamicSubTree(node) => node.tick(ctx),
        }
    }

    fn reset(&mut self) {
        match self {
            Node::Leaf(node) => node.reset(),
            Node::Composite(node) => node.reset(),
            Node::Decorator(node) => node.reset(),
            Node::SubTree(node) => node.reset(),
            Node::DynamicSubTree(node) => node.reset(),
        }
    }
}

macro_rules! into_node {
    ($outer:ident: $($inner:ident),+ $(,)?) => {
        $(
            impl<C> From<$inner<C>> for Node<C> {
                #[inline]
                fn from(node: $inner<C>) -> Self {
                    Node::$outer($outer::$inner(node))
                }
            }
        )+

        impl<C> From<$outer<C>> for Node<C> {
            #[inline]
            fn from(node: $outer<C>) -> Self {
                Node::$outer(node)
            }
        }
    };
}

into_node!(Leaf: Action, Condition, Sleep, SleepUntil, SleepWhile, Custom);
into_node!(Composite: Sequence, Selector, RandomSelector, Parallel);
into_node!(
    Decorator: Inverter,
    Repeater,
    RetryUntilSuccess,
    Cooldown,
    SuccessRate,
    SleepUntilSuccess,
);

impl<C> From<SubTree<C>> for Node<C> {
    #[inline]
    fn from(node: SubTree<C>) -> Self {
        Node::SubTree(node)
    }
}

impl<C> From<DynamicSubTree<C>> for Node<C> {
    #[inline]
    fn from(node: DynamicSubTree<C>) -> Self {
        Node::DynamicSubTree(node)
    }
}
