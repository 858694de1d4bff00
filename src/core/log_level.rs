//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, in increasing order.
///
/// `All` and `Off` are gate sentinels: `All` lets everything through, `Off`
/// silences the logger. Neither is ever attached to a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    #[default]
    All = 0,
    Trace = 1,
    Debug = 2,
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
    Off = 7,
}

impl Level {
    /// Every level a record can carry, lowest first.
    pub const RECORDABLE: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Display name handed to formatters; sentinels are `UNKNOWN`.
    pub fn name(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::All | Level::Off => "UNKNOWN",
        }
    }

    /// Parse a level name, falling back to `All` for anything unrecognised.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Level::All)
    }

    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::All,
            1 => Level::Trace,
            2 => Level::Debug,
            3 => Level::Info,
            4 => Level::Warn,
            5 => Level::Error,
            6 => Level::Fatal,
            _ => Level::Off,
        }
    }

    #[cfg(feature = "color")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Trace => Magenta,
            Level::Debug => Cyan,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error | Level::Fatal => Red,
            Level::All | Level::Off => White,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::All => f.write_str("ALL"),
            Level::Off => f.write_str("OFF"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(Level::All),
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            "OFF" => Ok(Level::Off),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::All < Level::Trace);
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Fatal < Level::Off);
    }

    #[test]
    fn test_default_admits_everything() {
        assert_eq!(Level::default(), Level::All);
    }

    #[test]
    fn test_sentinel_names() {
        assert_eq!(Level::All.name(), "UNKNOWN");
        assert_eq!(Level::Off.name(), "UNKNOWN");
        assert_eq!(Level::Warn.name(), "WARN");
        assert_eq!(Level::Off.to_string(), "OFF");
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("Off".parse::<Level>(), Ok(Level::Off));
        assert!("verbose".parse::<Level>().is_err());
        assert_eq!(Level::parse_lossy("verbose"), Level::All);
    }

    #[test]
    fn test_u8_roundtrip() {
        for level in [Level::All, Level::Info, Level::Fatal, Level::Off] {
            assert_eq!(Level::from_u8(level.as_u8()), level);
        }
    }
}
