//! Basic logger usage example
//!
//! Demonstrates synchronous console logging, tags, format strings and the
//! level gate.
//!
//! Run with: cargo run --example basic_usage

use gog::prelude::*;
use gog::{info, warnf};

fn main() {
    println!("=== gog - Basic Usage Example ===\n");

    let logger = Logger::builder().short_file(true).build();

    println!("1. Logging at different levels:");
    logger.trace(&["This is a trace message".into()]);
    logger.debug(&["This is a debug message".into()]);
    logger.info(&["This is an info message".into()]);
    logger.warn(&["This is a warning message".into()]);
    logger.error(&["This is an error message".into()]);

    println!("\n2. Tags, values and format strings:");
    logger.info_tag("net", &["listening on port ".into(), 8080.into()]);
    logger.debugf("{} of {} workers ready", &[&3, &4]);
    info!(logger, tag = "db", "pool size ", 16);
    warnf!(logger, "disk {} at {}%", "/var", 91);

    println!("\n3. Raising the gate to WARN - trace to info are hidden:");
    logger.set_level(Level::Warn);
    logger.trace(&["Trace message (hidden)".into()]);
    logger.info(&["Info message (hidden)".into()]);
    logger.warn(&["Warning message (visible)".into()]);

    println!("\n4. The process-wide default logger:");
    gog::info(&["from the default logger".into()]);
    gog::error_tagf("app", "exit code {}", &[&0]);

    println!("\n=== Example completed successfully! ===");
}
