//! Column-aligned text formatter

use super::padding::{fill_suffix, with_connectors};
use crate::core::{Formatter, Level, Record, Result, TimestampFormat};

/// Column width of the level name.
pub const LEVEL_WIDTH: usize = 8;
/// Column width of the file when only its base name is shown.
pub const SHORT_FILE_WIDTH: usize = 26;
/// Column width of the file when its full path is shown.
pub const FULL_FILE_WIDTH: usize = 64;
/// Column width of the line number.
pub const LINE_WIDTH: usize = 4;

/// One line per record:
///
/// ```text
/// 2025-01-08 10:30:45.123 ---- INFO ---------------- main.rs:12  (main)[net]listening
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    colorful: bool,
    timestamp_format: TimestampFormat,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text colored per level.
    #[cfg(feature = "color")]
    pub fn colorful() -> Self {
        Self {
            colorful: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn is_colorful(&self) -> bool {
        self.colorful
    }

    fn render(&self, level_name: &str, record: &Record) -> String {
        let file_width = if record.short_file() {
            SHORT_FILE_WIDTH
        } else {
            FULL_FILE_WIDTH
        };

        let mut line = self.timestamp_format.format(record.timestamp());
        line.push_str(&with_connectors(level_name, '-', LEVEL_WIDTH));
        line.push_str(&with_connectors(record.file(), '-', file_width));
        line.push(':');
        line.push_str(&fill_suffix(&record.line().to_string(), ' ', LINE_WIDTH));
        line.push('(');
        line.push_str(record.function());
        line.push(')');
        if !record.tag().is_empty() {
            line.push('[');
            line.push_str(record.tag());
            line.push(']');
        }
        line.push_str(record.body());
        line
    }

    #[cfg(feature = "color")]
    fn paint(&self, level: Level, line: String) -> String {
        use colored::Colorize;

        if !self.colorful {
            return line;
        }
        let colored = line.color(level.color_code());
        if level == Level::Fatal {
            colored.bold().to_string()
        } else {
            colored.to_string()
        }
    }

    #[cfg(not(feature = "color"))]
    fn paint(&self, _level: Level, line: String) -> String {
        line
    }
}

impl Formatter for TextFormatter {
    fn format(&self, level: Level, level_name: &str, record: &Record) -> Result<Vec<u8>> {
        let mut line = self.paint(level, self.render(level_name, record));
        line.push('\n');
        Ok(line.into_bytes())
    }
}
