//! Periodic counter recorder.
//!
//! # Responsibilities
//! - Advance the shared ops counter on a fixed cadence
//! - Exit within one tick of the shutdown signal

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

use crate::ops::OpsCounter;

/// Background task that increments the ops counter once per interval.
pub struct OpsRecorder {
    counter: Arc<OpsCounter>,
    interval: Duration,
}

impl OpsRecorder {
    pub fn new(counter: Arc<OpsCounter>, interval: Duration) -> Self {
        Self { counter, interval }
    }

    /// Run until the shutdown signal arrives.
    ///
    /// The counter advances exactly once per elapsed interval. Holds no lock
    /// while suspended between ticks.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            interval_ms = self.interval.as_millis() as u64,
            "Ops recorder starting"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval completes immediately; consume it so
        // the counter only advances after a full interval has elapsed.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.counter.increment();
                }
                _ = shutdown.recv() => {
                    tracing::info!("Ops recorder received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;

    #[tokio::test(start_paused = true)]
    async fn advances_exactly_once_per_tick() {
        let counter = Arc::new(OpsCounter::new());
        let shutdown = Shutdown::new();
        let recorder = OpsRecorder::new(counter.clone(), Duration::from_secs(2));
        let handle = tokio::spawn(recorder.run(shutdown.subscribe()));

        // Let the recorder register its timer before advancing the clock.
        tokio::task::yield_now().await;
        assert_eq!(counter.value(), 0);

        for expected in 1..=3u64 {
            time::advance(Duration::from_secs(2)).await;
            tokio::task::yield_now().await;
            assert_eq!(counter.value(), expected);
        }

        shutdown.trigger();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn stops_incrementing_after_shutdown() {
        let counter = Arc::new(OpsCounter::new());
        let shutdown = Shutdown::new();
        let recorder = OpsRecorder::new(counter.clone(), Duration::from_secs(2));
        let handle = tokio::spawn(recorder.run(shutdown.subscribe()));

        tokio::task::yield_now().await;
        time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(counter.value(), 1);

        shutdown.trigger();
        handle.await.unwrap();

        let frozen = counter.value();
        time::advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;
        assert_eq!(counter.value(), frozen);
    }
}
