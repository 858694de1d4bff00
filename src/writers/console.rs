//! Console writer implementation

use crate::core::{Record, Result, Writer};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes formatted records to standard output, or standard error when built
/// with [`ConsoleWriter::stderr`].
pub struct ConsoleWriter {
    stream: Stream,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for ConsoleWriter {
    fn write(&mut self, _record: &Record, data: &[u8]) -> Result<usize> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(data)?,
            Stream::Stderr => io::stderr().lock().write_all(data)?,
        }
        Ok(data.len())
    }

    fn close(&mut self) -> Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            Stream::Stdout => "console",
            Stream::Stderr => "console-stderr",
        }
    }
}
