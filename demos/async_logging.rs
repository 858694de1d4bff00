//! Async logging example
//!
//! Demonstrates the bounded queue with multi-threaded producers, and the
//! in-place fallback when the queue is full.
//!
//! Run with: cargo run --example async_logging

use gog::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== gog - Async Logging Example ===\n");

    let logger = Arc::new(
        Logger::builder()
            .async_mode(true)
            .queue_capacity(16)
            .short_file(true)
            .writer(FileWriter::new("async_test.log")?)
            .build(),
    );

    println!("1. Logging through the queue:");
    for i in 0..100 {
        logger.infof("Message #{}", &[&i]);
    }

    println!("\n2. Multi-threaded logging:");
    let mut handles = vec![];
    for thread_id in 0..5 {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for i in 0..20 {
                logger.info_tagf("worker", "Thread {} - Message {}", &[&thread_id, &i]);
            }
        }));
    }

    for handle in handles {
        let _ = handle.join();
    }

    if !logger.shutdown(Duration::from_secs(5)) {
        eprintln!("some records were not written");
    }

    let metrics = logger.metrics();
    println!("\n   Records emitted:  {}", metrics.records_emitted());
    println!("   Through queue:    {}", metrics.records_queued());
    println!("   Written in place: {}", metrics.sync_fallbacks());

    println!("\n=== Example completed successfully! ===");
    println!("Check 'async_test.log' for file output");

    Ok(())
}
