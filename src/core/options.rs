//! Serializable logger options
//!
//! Lets a host application keep its logging setup in a config file:
//!
//! ```
//! use gog::LoggerOptions;
//!
//! let options = LoggerOptions::from_json(
//!     r#"{ "level": "warn", "format": "json", "async": true }"#,
//! ).unwrap();
//! let logger = options.build().unwrap();
//! assert!(logger.is_async());
//! ```

use super::{
    config::Config,
    error::{LoggerError, Result},
    formatter::Formatter,
    log_level::Level,
    logger::{Logger, DEFAULT_QUEUE_CAPACITY},
    timestamp::TimestampFormat,
    writer::shared,
};
use crate::formatters::{JsonFormatter, TextFormatter};
use crate::writers::{ConsoleWriter, FileWriter};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Which formatter a logger built from [`LoggerOptions`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    /// Text colored per level; plain text without the `color` feature.
    TextColor,
    Json,
    JsonPretty,
}

impl OutputFormat {
    fn formatter(self, timestamp: TimestampFormat) -> Arc<dyn Formatter> {
        match self {
            OutputFormat::Text => Arc::new(TextFormatter::new().with_timestamp_format(timestamp)),
            OutputFormat::TextColor => Arc::new(colored_text().with_timestamp_format(timestamp)),
            OutputFormat::Json => Arc::new(JsonFormatter::new().with_timestamp_format(timestamp)),
            OutputFormat::JsonPretty => {
                Arc::new(JsonFormatter::pretty().with_timestamp_format(timestamp))
            }
        }
    }
}

#[cfg(feature = "color")]
fn colored_text() -> TextFormatter {
    TextFormatter::colorful()
}

#[cfg(not(feature = "color"))]
fn colored_text() -> TextFormatter {
    TextFormatter::new()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    /// Level name, parsed case-insensitively.
    pub level: String,
    pub call_skip: usize,
    pub short_file: bool,
    #[serde(rename = "async")]
    pub async_mode: bool,
    pub queue_capacity: usize,
    pub format: OutputFormat,
    pub timestamp: TimestampFormat,
    /// Append records to this file.
    pub file: Option<PathBuf>,
    /// Write records to stdout. Ignored when no file is set, since a logger
    /// without writers falls back to the console anyway.
    pub console: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: "all".to_string(),
            call_skip: 1,
            short_file: false,
            async_mode: false,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            format: OutputFormat::Text,
            timestamp: TimestampFormat::Standard,
            file: None,
            console: true,
        }
    }
}

impl LoggerOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<Level> {
        let level: Level = self
            .level
            .parse()
            .map_err(|e: String| LoggerError::config("level", e))?;

        if self.queue_capacity == 0 {
            return Err(LoggerError::config(
                "queue_capacity",
                "must be greater than zero",
            ));
        }

        Ok(level)
    }

    /// Open the configured writers and build the logger.
    pub fn build(&self) -> Result<Logger> {
        let level = self.validate()?;

        let mut config = Config::new();
        config.set_formatter(self.format.formatter(self.timestamp.clone()));
        if let Some(ref path) = self.file {
            config.add_writer(shared(FileWriter::new(path)?));
        }
        if self.console || self.file.is_none() {
            config.add_writer(shared(ConsoleWriter::new()));
        }

        Ok(Logger::builder()
            .level(level)
            .call_skip(self.call_skip)
            .short_file(self.short_file)
            .async_mode(self.async_mode)
            .queue_capacity(self.queue_capacity)
            .config(config)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_from_empty_json() {
        let options = LoggerOptions::from_json("{}").unwrap();
        assert_eq!(options, LoggerOptions::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let options = LoggerOptions::from_json(
            r#"{
                "level": "Warning",
                "call_skip": 2,
                "short_file": true,
                "async": true,
                "queue_capacity": 8,
                "format": "json-pretty",
                "timestamp": "Rfc3339",
                "file": "/tmp/app.log",
                "console": false
            }"#,
        )
        .unwrap();

        assert_eq!(options.validate().unwrap(), Level::Warn);
        assert_eq!(options.call_skip, 2);
        assert!(options.short_file);
        assert!(options.async_mode);
        assert_eq!(options.format, OutputFormat::JsonPretty);
        assert_eq!(options.timestamp, TimestampFormat::Rfc3339);
        assert_eq!(options.file, Some(PathBuf::from("/tmp/app.log")));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_level = LoggerOptions {
            level: "verbose".to_string(),
            ..LoggerOptions::default()
        };
        assert!(matches!(
            bad_level.build(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));

        let no_queue = LoggerOptions {
            queue_capacity: 0,
            ..LoggerOptions::default()
        };
        assert!(no_queue.validate().is_err());

        assert!(matches!(
            LoggerOptions::from_json(r#"{"format": "xml"}"#),
            Err(LoggerError::Json(_))
        ));
    }

    #[test]
    fn test_build_with_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("options.log");
        let options = LoggerOptions {
            level: "info".to_string(),
            format: OutputFormat::Json,
            file: Some(path.clone()),
            console: false,
            ..LoggerOptions::default()
        };

        let logger = options.build().unwrap();
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.config().writers().len(), 1);

        logger.debug(&["filtered".into()]);
        logger.info(&["kept".into()]);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("\"message\":\"kept\""));
    }
}
