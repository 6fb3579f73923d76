use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Pairing strategy between host and target ports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TopologyMode {
    /// One zone per host/target pair (single initiator, single target).
    #[default]
    #[serde(rename = "1:1")]
    OneToOne,
    /// One zone per host containing every target.
    #[serde(rename = "1:many")]
    OneToMany,
}

impl TopologyMode {
    /// Command-line spelling of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            TopologyMode::OneToOne => "1:1",
            TopologyMode::OneToMany => "1:many",
        }
    }
}

impl Display for TopologyMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a topology mode string is neither `1:1` nor `1:many`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("zone type must be either \"1:1\" or \"1:many\", got {0:?}")]
pub struct ModeParseError(pub String);

impl FromStr for TopologyMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1:1" => Ok(TopologyMode::OneToOne),
            "1:many" => Ok(TopologyMode::OneToMany),
            other => Err(ModeParseError(other.to_string())),
        }
    }
}

/// A named group of port WWNs allowed to talk to each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub name: String,
    /// Member WWNs, host first.
    pub members: Vec<String>,
}

/// The activatable collection that references every generated zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneSet {
    pub name: String,
    pub vsan: String,
    /// Zone names in creation order.
    pub zones: Vec<String>,
}
