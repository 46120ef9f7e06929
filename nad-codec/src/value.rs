//! Wire/semantic value translation
//!
//! The amplifier bridge reports every value as a string. Toggle-type
//! variables use the literal strings `"On"` and `"Off"`; everything else
//! (source names, model identifiers, volume echoes) is an opaque string.
//! `Value` normalizes the wire form into a typed in-memory form and back.

use std::fmt;

/// Semantic value of an amplifier variable
///
/// Detection is by value, not by variable name: any wire string that is
/// exactly `"On"` or `"Off"` decodes to a boolean, regardless of which
/// variable carried it. The mapping is lossless in both directions, so a
/// round trip through the wire form always returns the original value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Toggle state, `"On"`/`"Off"` on the wire
    Bool(bool),
    /// Any other value, kept in the device's raw string form
    Text(String),
}

impl Value {
    /// Convenience constructor for text values
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Decode a wire string into its semantic form
    pub fn from_wire(wire: &str) -> Self {
        match wire {
            "On" => Value::Bool(true),
            "Off" => Value::Bool(false),
            other => Value::Text(other.to_string()),
        }
    }

    /// Encode the semantic form back into its wire representation
    pub fn to_wire(&self) -> String {
        match self {
            Value::Bool(true) => "On".to_string(),
            Value::Bool(false) => "Off".to_string(),
            Value::Text(s) => s.clone(),
        }
    }

    /// Boolean view of the value, for toggle-type variables
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Text(_) => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}
