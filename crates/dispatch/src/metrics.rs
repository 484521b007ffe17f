//! Per-forwarder metrics for observability

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for a single forwarder
#[derive(Debug, Default)]
pub struct ForwarderMetrics {
    /// Total push attempts routed to this forwarder
    attempt_count: AtomicU64,
    /// Total successful forwards
    success_count: AtomicU64,
    /// Total failed forwards
    failure_count: AtomicU64,
}

impl ForwarderMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get attempt count
    pub fn attempt_count(&self) -> u64 {
        self.attempt_count.load(Ordering::Relaxed)
    }

    /// Increment attempt count
    pub fn inc_attempt_count(&self) {
        self.attempt_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get success count
    pub fn success_count(&self) -> u64 {
        self.success_count.load(Ordering::Relaxed)
    }

    /// Increment success count
    pub fn inc_success_count(&self) {
        self.success_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get failure count
    pub fn failure_count(&self) -> u64 {
        self.failure_count.load(Ordering::Relaxed)
    }

    /// Increment failure count
    pub fn inc_failure_count(&self) {
        self.failure_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            attempt_count: self.attempt_count(),
            success_count: self.success_count(),
            failure_count: self.failure_count(),
        }
    }
}

/// Snapshot of forwarder metrics (for reporting)
#[derive(Debug, Clone, Copy)]
pub struct MetricsSnapshot {
    pub attempt_count: u64,
    pub success_count: u64,
    pub failure_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_counts() {
        let metrics = ForwarderMetrics::new();
        metrics.inc_attempt_count();
        metrics.inc_attempt_count();
        metrics.inc_success_count();
        metrics.inc_failure_count();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.attempt_count, 2);
        assert_eq!(snapshot.success_count, 1);
        assert_eq!(snapshot.failure_count, 1);
    }
}
