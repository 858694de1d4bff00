//! Logger metrics for observability
//!
//! Counters describing what the pipeline did with the records it received:
//! how many went through the queue, how many fell back to synchronous
//! delivery and how many formatter or writer calls failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use gog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted();
/// metrics.record_sync_fallback();
///
/// assert_eq!(metrics.records_emitted(), 1);
/// assert_eq!(metrics.sync_fallbacks(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records that passed the level gate
    records_emitted: AtomicU64,

    /// Records handed to the drain thread
    records_queued: AtomicU64,

    /// Records delivered in place because the queue was full or closed
    sync_fallbacks: AtomicU64,

    /// Values left out of a message because they could not be converted
    values_dropped: AtomicU64,

    formatter_failures: AtomicU64,

    /// Failed or panicked writer calls
    writer_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_emitted: AtomicU64::new(0),
            records_queued: AtomicU64::new(0),
            sync_fallbacks: AtomicU64::new(0),
            values_dropped: AtomicU64::new(0),
            formatter_failures: AtomicU64::new(0),
            writer_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_emitted(&self) -> u64 {
        self.records_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_queued(&self) -> u64 {
        self.records_queued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sync_fallbacks(&self) -> u64 {
        self.sync_fallbacks.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn values_dropped(&self) -> u64 {
        self.values_dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn formatter_failures(&self) -> u64 {
        self.formatter_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn writer_failures(&self) -> u64 {
        self.writer_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.records_emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_queued(&self) -> u64 {
        self.records_queued.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sync_fallback(&self) -> u64 {
        self.sync_fallbacks.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_values_dropped(&self, count: u64) -> u64 {
        self.values_dropped.fetch_add(count, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_formatter_failure(&self) -> u64 {
        self.formatter_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_writer_failure(&self) -> u64 {
        self.writer_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.records_emitted.store(0, Ordering::Relaxed);
        self.records_queued.store(0, Ordering::Relaxed);
        self.sync_fallbacks.store(0, Ordering::Relaxed);
        self.values_dropped.store(0, Ordering::Relaxed);
        self.formatter_failures.store(0, Ordering::Relaxed);
        self.writer_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            records_emitted: AtomicU64::new(self.records_emitted()),
            records_queued: AtomicU64::new(self.records_queued()),
            sync_fallbacks: AtomicU64::new(self.sync_fallbacks()),
            values_dropped: AtomicU64::new(self.values_dropped()),
            formatter_failures: AtomicU64::new(self.formatter_failures()),
            writer_failures: AtomicU64::new(self.writer_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.records_emitted(), 0);
        assert_eq!(metrics.records_queued(), 0);
        assert_eq!(metrics.sync_fallbacks(), 0);
        assert_eq!(metrics.writer_failures(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_writer_failure(), 0);
        assert_eq!(metrics.record_writer_failure(), 1);
        assert_eq!(metrics.writer_failures(), 2);
    }

    #[test]
    fn test_values_dropped_accumulates() {
        let metrics = LoggerMetrics::new();
        metrics.record_values_dropped(2);
        metrics.record_values_dropped(3);
        assert_eq!(metrics.values_dropped(), 5);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();
        metrics.record_queued();
        metrics.record_formatter_failure();

        metrics.reset();

        assert_eq!(metrics.records_emitted(), 0);
        assert_eq!(metrics.records_queued(), 0);
        assert_eq!(metrics.formatter_failures(), 0);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();

        let snapshot = metrics.clone();
        metrics.record_emitted();

        assert_eq!(snapshot.records_emitted(), 1);
        assert_eq!(metrics.records_emitted(), 2);
    }
}
