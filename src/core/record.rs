//! Log record structure

use super::call_site::CallSite;
use super::log_level::Level;
use chrono::{DateTime, Local};
use std::fmt;

/// One log event.
///
/// Built once by the logger and then only read by the fan-out that
/// processes it; there are no setters.
#[derive(Debug, Clone)]
pub struct Record {
    tag: String,
    timestamp: DateTime<Local>,
    level: Level,
    body: String,
    file: String,
    function: String,
    line: u32,
    short_file: bool,
}

impl Record {
    pub fn new(tag: impl Into<String>, level: Level, body: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            timestamp: Local::now(),
            level,
            body: body.into(),
            file: String::new(),
            function: String::new(),
            line: 0,
            short_file: false,
        }
    }

    #[must_use]
    pub fn with_call_site(mut self, site: CallSite) -> Self {
        self.file = site.file;
        self.function = site.function;
        self.line = site.line;
        self
    }

    #[must_use]
    pub fn with_short_file(mut self, short_file: bool) -> Self {
        self.short_file = short_file;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Category label; empty when untagged.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Source file; empty when the call site could not be resolved.
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source line; zero when the call site could not be resolved.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Whether `file` was captured as a base name.
    pub fn short_file(&self) -> bool {
        self.short_file
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}:{} ({})",
            self.timestamp.format(super::timestamp::STANDARD_PATTERN),
            self.level,
            self.file,
            self.line,
            self.function
        )?;
        if !self.tag.is_empty() {
            write!(f, " [{}]", self.tag)?;
        }
        write!(f, " {}", self.body)
    }
}
