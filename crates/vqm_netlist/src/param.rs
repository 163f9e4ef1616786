//! Typed instance parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value of an instance parameter.
///
/// Serialized with an explicit type tag, e.g.
/// `{"type": "integer", "value": 8}` or `{"type": "string", "value": "dual_port"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ParamValue {
    /// An integer parameter.
    Integer(i64),
    /// A string parameter.
    String(String),
}

/// The type of a parameter value, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// An integer parameter.
    Integer,
    /// A string parameter.
    String,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Integer => write!(f, "integer"),
            ParamKind::String => write!(f, "string"),
        }
    }
}

impl ParamValue {
    /// Returns the type of this value.
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Integer(_) => ParamKind::Integer,
            ParamValue::String(_) => ParamKind::String,
        }
    }

    /// Returns the integer payload, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ParamValue::Integer(v) => Some(*v),
            ParamValue::String(_) => None,
        }
    }

    /// Returns the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            ParamValue::Integer(_) => None,
        }
    }
}

/// A named configuration parameter on a primitive instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// The parameter name.
    pub name: String,
    /// The parameter value.
    #[serde(flatten)]
    pub value: ParamValue,
}

impl Parameter {
    /// Creates an integer parameter.
    pub fn integer(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Integer(value),
        }
    }

    /// Creates a string parameter.
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::String(value.into()),
        }
    }
}
