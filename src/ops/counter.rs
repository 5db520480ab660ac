//! Shared monotonic operations counter.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::observability::metrics::OPS_COUNTER_NAME;

/// Monotonic counter of processed operations.
///
/// Starts at zero, never decreases, resets only on process restart.
/// Increments and reads are atomic, so a concurrent reader always observes
/// a previously committed value.
#[derive(Debug, Default)]
pub struct OpsCounter {
    value: AtomicU64,
}

impl OpsCounter {
    pub fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Record one processed operation.
    ///
    /// Also forwards the increment to the installed metrics recorder so the
    /// Prometheus endpoint observes the same series. With no recorder
    /// installed the forward is a no-op.
    pub fn increment(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
        metrics::counter!(OPS_COUNTER_NAME).increment(1);
    }

    /// Current committed value.
    pub fn value(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
