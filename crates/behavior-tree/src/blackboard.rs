//! String-keyed scratch storage shared between otherwise unconnected nodes.
//!
//! Hosts that know their data up front should carry it in their own context
//! struct; the [`Blackboard`] is for ad-hoc values whose set is only known at
//! runtime. Values are a closed tagged union, and typed reads of the wrong
//! kind return `None` rather than coercing.

use std::collections::HashMap;

use thiserror::Error;

use crate::Tick;

/// A value stored on a [`Blackboard`].
#[derive(Debug, Clone, PartialEq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Tick(Tick),
}

impl Value {
    /// The variant name, e.g. `"int"`.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// A typed read found a value of a different kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} value, found {found}")]
pub struct KindMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<Tick> for Value {
    fn from(value: Tick) -> Self {
        Value::Tick(value)
    }
}

macro_rules! typed_read {
    ($($ty:ty => $variant:ident as $kind:literal),+ $(,)?) => {
        $(
            impl TryFrom<&Value> for $ty {
                type Error = KindMismatch;

                fn try_from(value: &Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(inner) => Ok(inner.clone()),
                        other => Err(KindMismatch {
                            expected: $kind,
                            found: other.kind(),
                        }),
                    }
                }
            }
        )+
    };
}

typed_read!(
    bool => Bool as "bool",
    i64 => Int as "int",
    f64 => Float as "float",
    String => Text as "text",
    Tick => Tick as "tick",
);

/// Heterogeneous key-value store with type-checked reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blackboard {
    entries: HashMap<String, Value>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// The raw value under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The value under `key` if it has type `T`.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: for<'a> TryFrom<&'a Value>,
    {
        self.get(key).and_then(|value| T::try_from(value).ok())
    }

    /// The value under `key` if it has type `T`, otherwise `default`.
    pub fn get_or<T>(&self, key: &str, default: T) -> T
    where
        T: for<'a> TryFrom<&'a Value>,
    {
        self.get_as(key).unwrap_or(default)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_as(key)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get_as(key)
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get_as(key)
    }

    /// Borrowed text, avoiding the clone `get_as::<String>` makes.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn get_tick(&self, key: &str) -> Option<Tick> {
        self.get_as(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
