//! Demo Web Application Library

pub mod config;
pub mod http;
pub mod identity;
pub mod lifecycle;
pub mod observability;
pub mod ops;

pub use config::AppConfig;
pub use http::HttpServer;
pub use identity::ProcessIdentity;
pub use lifecycle::Shutdown;
