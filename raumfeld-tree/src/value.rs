//! Typed leaf values

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A typed scalar held by a leaf.
///
/// `Null` is the explicit "no value" sentinel; conversion and
/// synchronization pass it through untouched and use it to signal deletion
/// intent. `Number` carries `f64`, NaN included: a value that failed numeric
/// parsing stays distinguishable from a legitimate `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    /// No value
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value; NaN marks a failed numeric conversion
    Number(f64),
    /// String value
    Text(String),
    /// Structured value, carried as-is
    Json(serde_json::Value),
}

impl StateValue {
    /// True for the null sentinel
    pub fn is_null(&self) -> bool {
        matches!(self, StateValue::Null)
    }

    /// True for a NaN number (the failed-conversion marker)
    pub fn is_nan(&self) -> bool {
        matches!(self, StateValue::Number(n) if n.is_nan())
    }

    /// Numeric view, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StateValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String view, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StateValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for StateValue {
    /// Canonical string form, used by conversion to the text target type
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Null => f.write_str("null"),
            StateValue::Bool(b) => write!(f, "{}", b),
            StateValue::Number(n) => write!(f, "{}", n),
            StateValue::Text(s) => f.write_str(s),
            StateValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for StateValue {
    fn from(s: &str) -> Self {
        StateValue::Text(s.to_string())
    }
}

impl From<String> for StateValue {
    fn from(s: String) -> Self {
        StateValue::Text(s)
    }
}

impl From<f64> for StateValue {
    fn from(n: f64) -> Self {
        StateValue::Number(n)
    }
}

impl From<bool> for StateValue {
    fn from(b: bool) -> Self {
        StateValue::Bool(b)
    }
}

/// `None` maps to the null sentinel
impl From<Option<String>> for StateValue {
    fn from(opt: Option<String>) -> Self {
        match opt {
            Some(s) => StateValue::Text(s),
            None => StateValue::Null,
        }
    }
}

impl From<serde_json::Value> for StateValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => StateValue::Null,
            serde_json::Value::Bool(b) => StateValue::Bool(b),
            serde_json::Value::Number(n) => {
                StateValue::Number(n.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(s) => StateValue::Text(s),
            other => StateValue::Json(other),
        }
    }
}

/// A persisted leaf value: the value itself, the acknowledged flag, and the
/// timestamp of the write.
///
/// An acknowledged write originated from the authoritative source snapshot,
/// as opposed to a user-initiated command write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedValue {
    /// The stored value
    pub value: StateValue,
    /// True when the write originated from the authoritative source
    pub acknowledged: bool,
    /// When the write happened
    pub timestamp: DateTime<Utc>,
}

impl PersistedValue {
    /// A persisted value stamped with the current time
    pub fn now(value: StateValue, acknowledged: bool) -> Self {
        Self {
            value,
            acknowledged,
            timestamp: Utc::now(),
        }
    }
}
