//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) → trigger graceful shutdown
//!
//! Shutdown (shutdown.rs):
//!     Signal received → server drains → background tasks exit → joined
//! ```
//!
//! # Design Decisions
//! - One broadcast channel fans the signal out to every long-running task
//! - The owner joins background tasks; nothing outlives orderly shutdown

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
