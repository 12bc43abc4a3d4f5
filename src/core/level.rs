//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log line.
///
/// Ordered by discriminant, so a *smaller* value is *more* severe:
/// `Error < Warning < Info < Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Level {
    Error = -2,
    Warning = -1,
    #[default]
    Info = 0,
    Debug = 1,
}

impl Level {
    /// All levels, most severe first
    pub const ALL: [Level; 4] = [Level::Error, Level::Warning, Level::Info, Level::Debug];

    /// Fixed three-character marker written into every header
    pub fn marker(&self) -> &'static str {
        match self {
            Level::Error => "[E]",
            Level::Warning => "[W]",
            Level::Info => "[I]",
            Level::Debug => "[D]",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Parse a level token the way the setters accept it.
    ///
    /// Case-insensitive `error|e`, `warning|w`, `info|i`, `debug|d`.
    /// Anything else yields `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "error" | "e" => Some(Level::Error),
            "warning" | "w" => Some(Level::Warning),
            "info" | "i" => Some(Level::Info),
            "debug" | "d" => Some(Level::Debug),
            _ => None,
        }
    }

    pub(crate) fn from_i8(value: i8) -> Self {
        match value {
            -2 => Level::Error,
            -1 => Level::Warning,
            0 => Level::Info,
            _ => Level::Debug,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Error => Red,
            Level::Warning => Yellow,
            Level::Info => Green,
            Level::Debug => Blue,
        }
    }
}

/// Returns true iff a message at `level` passes a logger set to `threshold`.
#[inline]
pub fn should_emit(threshold: Level, level: Level) -> bool {
    level <= threshold
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_token(s).ok_or_else(|| LoggerError::invalid_level(s))
    }
}

/// Accepts the same tokens as [`Level::from_token`]; anything else is an error.
impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
