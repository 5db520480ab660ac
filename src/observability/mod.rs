//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handlers produce:
//!     → logging.rs (structured log events, traceID field)
//!     → tracing.rs (trace identifier extracted from inbound headers)
//!
//! Ops recorder produces:
//!     → metrics.rs (myapp_processed_ops_total counter)
//!     → Prometheus scrape via /metrics
//! ```
//!
//! # Design Decisions
//! - Structured key/value logging; the subscriber owns formatting
//! - Trace extraction is best-effort and never fails a request
//! - Metric updates are cheap (atomic increments)

pub mod logging;
pub mod metrics;
pub mod tracing;
