//! Formatter and writer configuration held by a logger

use super::formatter::Formatter;
use super::writer::{shared, SharedWriter, Writer};
use std::fmt;
use std::sync::Arc;

/// The formatter and the ordered writers a logger fans records out to.
///
/// A logger keeps its configuration behind an `Arc`; a record that is already
/// being fanned out keeps using the snapshot it started with, while setters
/// copy the configuration and publish the new version for the next record.
#[derive(Clone, Default)]
pub struct Config {
    formatter: Option<Arc<dyn Formatter>>,
    writers: Vec<SharedWriter>,
}

impl Config {
    /// An empty configuration: no formatter and no writers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Colorized text on the console.
    #[cfg(feature = "color")]
    pub fn console() -> Self {
        Self::new()
            .with_formatter(crate::formatters::TextFormatter::colorful())
            .with_writer(crate::writers::ConsoleWriter::new())
    }

    /// Plain text on the console.
    #[cfg(not(feature = "color"))]
    pub fn console() -> Self {
        Self::new()
            .with_formatter(crate::formatters::TextFormatter::new())
            .with_writer(crate::writers::ConsoleWriter::new())
    }

    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.set_formatter(Arc::new(formatter));
        self
    }

    #[must_use]
    pub fn with_writer<W: Writer + 'static>(mut self, writer: W) -> Self {
        self.add_writer(shared(writer));
        self
    }

    pub fn set_formatter(&mut self, formatter: Arc<dyn Formatter>) {
        self.formatter = Some(formatter);
    }

    /// Replace all writers.
    pub fn set_writers(&mut self, writers: Vec<SharedWriter>) {
        self.writers = writers;
    }

    pub fn add_writer(&mut self, writer: SharedWriter) {
        self.writers.push(writer);
    }

    pub fn reset_writers(&mut self) {
        self.writers.clear();
    }

    pub fn formatter(&self) -> Option<&Arc<dyn Formatter>> {
        self.formatter.as_ref()
    }

    pub fn writers(&self) -> &[SharedWriter] {
        &self.writers
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let writer_names: Vec<String> = self
            .writers
            .iter()
            .map(|w| w.lock().name().to_string())
            .collect();
        f.debug_struct("Config")
            .field("formatter", &self.formatter.is_some())
            .field("writers", &writer_names)
            .finish()
    }
}
