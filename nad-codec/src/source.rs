//! Input source selection

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Input sources selectable on the amplifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Cd,
    Tuner,
    Video,
    Disc,
    Ipod,
    Tape2,
    Aux,
}

impl Source {
    /// All selectable sources, in front-panel order
    pub const ALL: [Source; 7] = [
        Source::Cd,
        Source::Tuner,
        Source::Video,
        Source::Disc,
        Source::Ipod,
        Source::Tape2,
        Source::Aux,
    ];

    /// Wire name of this source
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Cd => "CD",
            Source::Tuner => "Tuner",
            Source::Video => "Video",
            Source::Disc => "Disc",
            Source::Ipod => "Ipod",
            Source::Tape2 => "Tape2",
            Source::Aux => "Aux",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a source name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown source: {0}")]
pub struct UnknownSource(pub String);

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownSource(s.to_string()))
    }
}
