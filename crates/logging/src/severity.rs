use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Severity of a log record, ordered from least to most severe.
///
/// A record reaches a logger's sinks only if its severity is greater than or
/// equal to the logger's configured threshold.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Severity {
    /// Fine-grained diagnostic detail.
    Debug,
    /// Routine progress information.
    #[default]
    Info,
    /// Something unexpected that the application can tolerate.
    Warning,
    /// A failure of an operation.
    Error,
    /// A failure the application likely cannot recover from.
    Critical,
}

impl Severity {
    /// Looks up a severity by name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Severity::Info`]. This leniency is a
    /// deliberate contract: callers configuring a logger from free-form input
    /// get a working logger rather than an error.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "DEBUG" => Self::Debug,
            "WARNING" => Self::Warning,
            "ERROR" => Self::Error,
            "CRITICAL" => Self::Critical,
            _ => Self::Info,
        }
    }

    /// Returns the uppercase name of the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
