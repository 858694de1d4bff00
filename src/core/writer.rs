//! Writer trait for log output destinations

use super::{error::Result, record::Record};
use parking_lot::Mutex;
use std::sync::Arc;

/// A destination for formatted records.
///
/// The logger keeps every writer behind its own mutex, so `write` is never
/// entered by two threads at once for the same writer, even when the
/// synchronous path and the drain thread deliver records at the same time.
/// Writers that share an underlying resource with other writers must still
/// synchronize that resource themselves.
pub trait Writer: Send {
    /// Write one formatted record, returning the number of bytes written.
    fn write(&mut self, record: &Record, data: &[u8]) -> Result<usize>;

    /// Release the underlying resource.
    fn close(&mut self) -> Result<()>;

    fn name(&self) -> &str {
        "writer"
    }
}

/// A writer as stored in a logger configuration.
pub type SharedWriter = Arc<Mutex<dyn Writer>>;

/// Wrap a writer for use in a [`Config`](super::config::Config).
pub fn shared<W: Writer + 'static>(writer: W) -> SharedWriter {
    Arc::new(Mutex::new(writer))
}
