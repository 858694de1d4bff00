//! Formatter trait turning a record into bytes

use super::{error::Result, log_level::Level, record::Record};

/// Renders a record for a writer.
///
/// The logger calls `format` once per writer for every record, from the
/// caller's thread or from the drain thread, so implementations must be
/// shareable across threads.
pub trait Formatter: Send + Sync {
    fn format(&self, level: Level, level_name: &str, record: &Record) -> Result<Vec<u8>>;
}
