//! Command model for the NAD control protocol
//!
//! A command names a variable, an operator, and (for `=` only) a value.
//! The device's delimited text form concatenates the three with no
//! separators, prefixed with the `Main.` section: `Main.Power=On`,
//! `Main.Volume+`, `Main.Model?`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{Value, Variable};

/// Action applied to a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=` set an absolute value
    Set,
    /// `+` increment
    Increment,
    /// `-` decrement
    Decrement,
    /// `?` query the current value
    Query,
}

impl Operator {
    /// Wire symbol for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Set => "=",
            Operator::Increment => "+",
            Operator::Decrement => "-",
            Operator::Query => "?",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request to the amplifier
///
/// A value travels with `=` and only with `=`. The constructors are the
/// only way to build a command, so the pairing holds for every instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    variable: Variable,
    operator: Operator,
    value: Option<Value>,
}

impl Command {
    /// Set a variable to an absolute value
    pub fn set(variable: Variable, value: impl Into<Value>) -> Self {
        Self {
            variable,
            operator: Operator::Set,
            value: Some(value.into()),
        }
    }

    /// Step a variable up
    pub fn increment(variable: Variable) -> Self {
        Self {
            variable,
            operator: Operator::Increment,
            value: None,
        }
    }

    /// Step a variable down
    pub fn decrement(variable: Variable) -> Self {
        Self {
            variable,
            operator: Operator::Decrement,
            value: None,
        }
    }

    /// Ask the device for a variable's current value
    pub fn query(variable: Variable) -> Self {
        Self {
            variable,
            operator: Operator::Query,
            value: None,
        }
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

impl fmt::Display for Command {
    /// Delimited device form, with the value in its wire encoding
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Main.{}{}", self.variable, self.operator)?;
        if let Some(value) = &self.value {
            f.write_str(&value.to_wire())?;
        }
        Ok(())
    }
}

/// Error returned when a delimited command string does not parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// No `=`, `+`, `-` or `?` found
    #[error("missing operator in command: {0}")]
    MissingOperator(String),

    /// Operator found but no variable name before it
    #[error("missing variable in command: {0}")]
    MissingVariable(String),

    /// `=` requires a value after it
    #[error("missing value in command: {0}")]
    MissingValue(String),

    /// `+`, `-` and `?` take no value
    #[error("unexpected value after '{operator}' in command: {input}")]
    UnexpectedValue { operator: Operator, input: String },
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parse the delimited device form, with or without the `Main.` prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix("Main.").unwrap_or(s);
        let (at, operator) = body
            .char_indices()
            .find_map(|(i, c)| {
                let operator = match c {
                    '=' => Operator::Set,
                    '+' => Operator::Increment,
                    '-' => Operator::Decrement,
                    '?' => Operator::Query,
                    _ => return None,
                };
                Some((i, operator))
            })
            .ok_or_else(|| ParseCommandError::MissingOperator(s.to_string()))?;

        let variable = &body[..at];
        let rest = &body[at + 1..];
        if variable.is_empty() {
            return Err(ParseCommandError::MissingVariable(s.to_string()));
        }

        match operator {
            Operator::Set if rest.is_empty() => {
                Err(ParseCommandError::MissingValue(s.to_string()))
            }
            Operator::Set => Ok(Command::set(Variable::from(variable), Value::from_wire(rest))),
            _ if !rest.is_empty() => Err(ParseCommandError::UnexpectedValue {
                operator,
                input: s.to_string(),
            }),
            Operator::Increment => Ok(Command::increment(Variable::from(variable))),
            Operator::Decrement => Ok(Command::decrement(Variable::from(variable))),
            Operator::Query => Ok(Command::query(Variable::from(variable))),
        }
    }
}
