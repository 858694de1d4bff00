//! Formatter implementations

pub mod json;
pub mod padding;
pub mod text;

pub use json::{JsonFormatter, JsonLine};
pub use text::TextFormatter;

// Re-export the trait for convenience
pub use crate::core::Formatter;
