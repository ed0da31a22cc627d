//! Jump test metrics and storage backend selectors.

use crate::error::RosterError;
use std::fmt;
use std::str::FromStr;

/// One of the four measurements recorded per jump test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpMetric {
    FlightTime,
    JumpHeight,
    RepetitionIndex,
    ContactTime,
}

impl JumpMetric {
    pub const ALL: [JumpMetric; 4] = [
        JumpMetric::FlightTime,
        JumpMetric::JumpHeight,
        JumpMetric::RepetitionIndex,
        JumpMetric::ContactTime,
    ];

    /// Human-readable label used in chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            JumpMetric::FlightTime => "Flight Time",
            JumpMetric::JumpHeight => "Jump Height",
            JumpMetric::RepetitionIndex => "Repetition Index",
            JumpMetric::ContactTime => "Contact Time",
        }
    }
}

impl fmt::Display for JumpMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JumpMetric::FlightTime => "flight-time",
            JumpMetric::JumpHeight => "jump-height",
            JumpMetric::RepetitionIndex => "repetition-index",
            JumpMetric::ContactTime => "contact-time",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for JumpMetric {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "flight-time" | "flighttime" | "ft" => Ok(JumpMetric::FlightTime),
            "jump-height" | "jumpheight" | "jh" => Ok(JumpMetric::JumpHeight),
            "repetition-index" | "repetitionindex" | "ri" => Ok(JumpMetric::RepetitionIndex),
            "contact-time" | "contacttime" | "ct" => Ok(JumpMetric::ContactTime),
            _ => Err(RosterError::validation(format!("Unknown metric: {}", s))),
        }
    }
}

/// Which durable storage implementation backs the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// One JSON file per key in the data directory.
    #[default]
    File,
    /// Key-value table in a SQLite database in the data directory.
    Sqlite,
    /// Nothing is written; state lives for a single invocation.
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StorageBackend::File => "file",
            StorageBackend::Sqlite => "sqlite",
            StorageBackend::Memory => "memory",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StorageBackend {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "json" => Ok(StorageBackend::File),
            "sqlite" | "db" => Ok(StorageBackend::Sqlite),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            _ => Err(RosterError::validation(format!(
                "Unknown storage backend: {}",
                s
            ))),
        }
    }
}
