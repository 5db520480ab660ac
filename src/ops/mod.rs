//! Background operations subsystem.
//!
//! # Data Flow
//! ```text
//! OpsRecorder (timer task)
//!     → OpsCounter.increment() every tick
//!     → metrics recorder (myapp_processed_ops_total)
//!     → scraped via /metrics endpoint
//! ```
//!
//! # Design Decisions
//! - The counter is an owned atomic passed by Arc, not an ambient global
//! - Exactly one producer (the recorder task); any number of readers
//! - The recorder is cancellable and is joined during orderly shutdown

pub mod counter;
pub mod recorder;

pub use counter::OpsCounter;
pub use recorder::OpsRecorder;
