//! Value and command codec for NAD amplifier control
//!
//! This crate models the NAD control protocol's commands and translates
//! between the wire representation of values (`"On"`/`"Off"` strings for
//! toggles, raw strings otherwise) and the semantic in-memory form used by
//! the rest of the system. It performs no I/O; the `nad-api` crate carries
//! commands over HTTP and the `nad-session` crate reconciles replies.

pub mod command;
pub mod source;
pub mod value;
pub mod variable;

pub use command::{Command, Operator, ParseCommandError};
pub use source::{Source, UnknownSource};
pub use value::Value;
pub use variable::Variable;
