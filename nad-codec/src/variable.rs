//! Named amplifier properties

use std::fmt;

/// A controllable or queryable property of the amplifier
///
/// The device understands more variables than the remote exposes buttons
/// for; `Other` keeps the command model open to any name a reply carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Variable {
    /// Main power
    Power,
    /// Audio mute
    Mute,
    /// Main volume
    Volume,
    /// Input source selection
    Source,
    /// Speaker A output (off when listening on headphones)
    SpeakerA,
    /// Amplifier model identifier
    Model,
    /// Any other variable the device understands
    Other(String),
}

impl Variable {
    /// Wire name of this variable
    pub fn as_str(&self) -> &str {
        match self {
            Variable::Power => "Power",
            Variable::Mute => "Mute",
            Variable::Volume => "Volume",
            Variable::Source => "Source",
            Variable::SpeakerA => "SpeakerA",
            Variable::Model => "Model",
            Variable::Other(name) => name,
        }
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        match name {
            "Power" => Variable::Power,
            "Mute" => Variable::Mute,
            "Volume" => Variable::Volume,
            "Source" => Variable::Source,
            "SpeakerA" => Variable::SpeakerA,
            "Model" => Variable::Model,
            other => Variable::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
