//! JSON formatter for structured logging
//!
//! Each record becomes one JSON object followed by a newline, which makes the
//! output compatible with line-oriented log collectors.

use crate::core::{Formatter, Level, LoggerError, Record, Result, TimestampFormat};
use serde::{Deserialize, Serialize};

/// The JSON shape of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonLine {
    pub tag: String,
    pub timestamp: String,
    pub level: String,
    /// `file:line (function)`
    pub func: String,
    pub message: String,
}

impl JsonLine {
    fn from_record(record: &Record, level_name: &str, timestamp_format: &TimestampFormat) -> Self {
        Self {
            tag: record.tag().to_string(),
            timestamp: timestamp_format.format(record.timestamp()),
            level: level_name.to_string(),
            func: format!(
                "{}:{} ({})",
                record.file(),
                record.line(),
                record.function()
            ),
            message: record.body().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pretty: bool,
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multi-line output indented with tabs.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    fn encode(&self, line: &JsonLine) -> std::result::Result<Vec<u8>, serde_json::Error> {
        if !self.pretty {
            return serde_json::to_vec(line);
        }

        let mut buf = Vec::with_capacity(256);
        let indent = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, indent);
        line.serialize(&mut ser)?;
        Ok(buf)
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, _level: Level, level_name: &str, record: &Record) -> Result<Vec<u8>> {
        let line = JsonLine::from_record(record, level_name, &self.timestamp_format);
        let mut buf = self
            .encode(&line)
            .map_err(|e| LoggerError::formatter("json", e.to_string()))?;
        buf.push(b'\n');
        Ok(buf)
    }
}
