//! Error types raised while assembling trees.
//!
//! Only construction can fail. Once a tree is built, every outcome is a
//! [`Status`](crate::Status), never an error.

use thiserror::Error;

use crate::composite::CompositeKind;

/// Errors surfaced by [`Builder::build`](crate::Builder::build).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("{open} composite scope(s) left open; call end() for each composite")]
    UnclosedComposite { open: usize },

    #[error("end() called with no open composite scope")]
    UnbalancedEnd,

    #[error("{kind} closed without any children")]
    EmptyComposite { kind: CompositeKind },

    #[error("{decorator} decorator has no node to wrap")]
    DanglingDecorator { decorator: &'static str },

    #[error("no root node declared")]
    NoRoot,

    #[error("expected exactly one root node, found {count}")]
    MultipleRoots { count: usize },

    #[error("success chance {chance} is outside [0, 1]")]
    InvalidChance { chance: f64 },
}

pub type Result<T> = std::result::Result<T, BuildError>;
