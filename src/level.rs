//! Severity levels.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Severity of a log record.
///
/// Levels form a flat set: every record is written regardless of level,
/// there is no minimum-level gate. Two levels carry extra behavior —
/// [`Level::Debug`] records include the caller's `file` and `line`, and a
/// successfully written [`Level::Fatal`] record triggers the logger's
/// terminate hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// The lowercase token used both in the API and verbatim as the
    /// record's `level` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            other => Err(Error::UnknownLevel(other.to_owned())),
        }
    }
}
