//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → handlers.rs (static pages, metrics scrape)
//!     → response sent to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
