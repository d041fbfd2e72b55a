//! Typed block state values and the axes that enumerate them.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A single state value. Axes are homogeneous: every value in a domain has the
/// same [`StateType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Bool(bool),
    Int(i32),
    Str(Cow<'static, str>),
}

/// The type tag of a [`StateValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateType {
    Bool,
    Int,
    Str,
}

/// State key -> value. Ordered by key so model variant strings are stable.
pub type StateMap = BTreeMap<String, StateValue>;

impl StateValue {
    pub const fn borrowed(s: &'static str) -> Self {
        StateValue::Str(Cow::Borrowed(s))
    }

    pub fn ty(&self) -> StateType {
        match self {
            StateValue::Bool(_) => StateType::Bool,
            StateValue::Int(_) => StateType::Int,
            StateValue::Str(_) => StateType::Str,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StateValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            StateValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StateValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Bool(b) => write!(f, "{b}"),
            StateValue::Int(i) => write!(f, "{i}"),
            StateValue::Str(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StateType::Bool => "bool",
            StateType::Int => "int",
            StateType::Str => "string",
        })
    }
}

impl From<bool> for StateValue {
    fn from(b: bool) -> Self {
        StateValue::Bool(b)
    }
}

impl From<i32> for StateValue {
    fn from(i: i32) -> Self {
        StateValue::Int(i)
    }
}

impl From<&'static str> for StateValue {
    fn from(s: &'static str) -> Self {
        StateValue::borrowed(s)
    }
}

impl From<String> for StateValue {
    fn from(s: String) -> Self {
        StateValue::Str(Cow::Owned(s))
    }
}

/// Something that declares a state key and the values it can take.
///
/// `domain` must be finite, and each call must return the full sequence in the
/// same order.
pub trait StateAxis {
    fn key(&self) -> &str;
    fn domain(&self) -> Vec<StateValue>;
}

/// A concrete axis: a key plus an explicit, ordered list of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    key: Cow<'static, str>,
    values: Vec<StateValue>,
}

impl Axis {
    pub fn new(key: impl Into<Cow<'static, str>>, values: Vec<StateValue>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    /// `[false, true]`.
    pub fn boolean(key: impl Into<Cow<'static, str>>) -> Self {
        Self::new(key, vec![StateValue::Bool(false), StateValue::Bool(true)])
    }

    pub fn int_range(key: impl Into<Cow<'static, str>>, range: RangeInclusive<i32>) -> Self {
        Self::new(key, range.map(StateValue::Int).collect())
    }

    pub fn strings(key: impl Into<Cow<'static, str>>, values: &[&'static str]) -> Self {
        Self::new(key, values.iter().map(|&v| StateValue::borrowed(v)).collect())
    }

    pub fn values(&self) -> &[StateValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index of `value` within the domain.
    pub fn position(&self, value: &StateValue) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Type of the domain, taken from its first value.
    pub fn value_type(&self) -> Option<StateType> {
        self.values.first().map(StateValue::ty)
    }
}

impl StateAxis for Axis {
    fn key(&self) -> &str {
        &self.key
    }

    fn domain(&self) -> Vec<StateValue> {
        self.values.clone()
    }
}
