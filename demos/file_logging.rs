//! File logging example
//!
//! Demonstrates loading the logger configuration from JSON and writing JSON
//! records to a file and the console at the same time.
//!
//! Run with: cargo run --example file_logging

use gog::prelude::*;
use std::time::Duration;

const OPTIONS: &str = r#"{
    "level": "debug",
    "short_file": true,
    "format": "json",
    "timestamp": "Rfc3339",
    "file": "application.log",
    "console": true
}"#;

fn main() -> Result<()> {
    println!("=== gog - File Logging Example ===\n");

    let logger = LoggerOptions::from_json(OPTIONS)?.build()?;

    println!("1. Logging to both console and file:");
    logger.info(&["Application started".into()]);
    logger.debug(&["Loading configuration...".into()]);
    logger.trace(&["Below the gate, not written".into()]);
    logger.warn_tag("config", &["Using default settings for some options".into()]);
    logger.error_tag("plugin", &["Failed to load optional plugin".into()]);

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.infof("Processing item {}/5", &[&i]);
        if i == 3 {
            logger.warnf("Item {} took longer than expected", &[&i]);
        }
    }

    logger.info(&["All operations completed".into()]);
    logger.shutdown(Duration::from_secs(1));

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
