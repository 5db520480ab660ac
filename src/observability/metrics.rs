//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Install the Prometheus recorder
//! - Register the ops counter with its help text
//! - Hand the scrape handle to the HTTP server
//!
//! # Metrics
//! - `myapp_processed_ops_total` (counter): background ticks processed

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Name of the ops counter as exposed to scrapers.
pub const OPS_COUNTER_NAME: &str = "myapp_processed_ops_total";

/// Help text attached to the ops counter.
pub const OPS_COUNTER_HELP: &str = "The total number of processed events";

/// Install the global Prometheus recorder.
///
/// Pre-registers the ops counter at zero so the series is present on the
/// first scrape. Can only succeed once per process; a second install is a
/// startup error.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    metrics::describe_counter!(OPS_COUNTER_NAME, OPS_COUNTER_HELP);
    metrics::counter!(OPS_COUNTER_NAME).absolute(0);
    Ok(handle)
}
