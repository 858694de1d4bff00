//! Criterion benchmarks for gog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gog::core::placeholder::substitute;
use gog::prelude::*;
use std::sync::Arc;
use std::time::Duration;

/// Discards everything, so the numbers measure the pipeline and not the sink.
struct NullWriter;

impl Writer for NullWriter {
    fn write(&mut self, _record: &Record, data: &[u8]) -> Result<usize> {
        Ok(black_box(data).len())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

fn null_logger<F: Formatter + 'static>(formatter: F, async_mode: bool) -> Logger {
    Logger::builder()
        .async_mode(async_mode)
        .queue_capacity(10_000)
        .config(Config::new().with_formatter(formatter).with_writer(NullWriter))
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder", |b| {
        b.iter(|| black_box(Logger::builder().config(Config::new()).build()));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_sync_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logging");
    group.throughput(Throughput::Elements(1));

    let text = null_logger(TextFormatter::new(), false);
    group.bench_function("text_values", |b| {
        b.iter(|| text.info(&[black_box("port ").into(), black_box(8080).into()]));
    });

    group.bench_function("text_format", |b| {
        b.iter(|| text.infof(black_box("port {}"), &[&black_box(8080)]));
    });

    let json = null_logger(JsonFormatter::new(), false);
    group.bench_function("json_values", |b| {
        b.iter(|| json.info_tag("net", &[black_box("listening").into()]));
    });

    group.finish();
}

fn bench_async_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("async_logging");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(TextFormatter::new(), true);
    group.bench_function("text_values", |b| {
        b.iter(|| logger.info(&[black_box("queued").into()]));
    });

    group.finish();
    logger.shutdown(Duration::from_secs(5));
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");
    group.throughput(Throughput::Elements(400));

    let logger = Arc::new(null_logger(TextFormatter::new(), true));
    group.bench_function("4_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            logger.debugf("{} {}", &[&t, &i]);
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
        });
    });

    group.finish();
    logger.shutdown(Duration::from_secs(5));
}

// ============================================================================
// Component Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(TextFormatter::new(), false);
    logger.set_level(Level::Error);

    group.bench_function("filtered_out", |b| {
        b.iter(|| logger.debug(&[black_box("dropped").into()]));
    });

    group.finish();
}

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let record = Record::new("net", Level::Info, "listening on port 8080");
    let text = TextFormatter::new();
    let json = JsonFormatter::new();

    group.bench_function("text", |b| {
        b.iter(|| text.format(Level::Info, "INFO", black_box(&record)));
    });

    group.bench_function("json", |b| {
        b.iter(|| json.format(Level::Info, "INFO", black_box(&record)));
    });

    group.bench_function("substitute", |b| {
        b.iter(|| substitute(black_box("{} of {} done ({}%)"), &[&3, &4, &75]));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_sync_logging,
    bench_async_logging,
    bench_concurrent_logging,
    bench_level_filtering,
    bench_formatters,
);
criterion_main!(benches);
