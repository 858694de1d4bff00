//! Writer implementations

pub mod console;
pub mod file;

pub use console::ConsoleWriter;
pub use file::FileWriter;

// Re-export the trait for convenience
pub use crate::core::{SharedWriter, Writer};
