//! Request handlers.
//!
//! The three page handlers never fail: each logs one structured record with
//! the best-effort trace identifier and returns a fixed plaintext body with
//! status 200. The metrics handler renders the Prometheus exposition text.

use axum::extract::State;
use axum::http::HeaderMap;

use crate::http::server::AppState;
use crate::observability::tracing::extract_trace_id;

pub const HELLO_BODY: &str = "Hello this web application hello page";
pub const POST_BODY: &str = "hey this is post page";
pub const WEB_BODY: &str = "Hello this is web page";

pub async fn hello(State(state): State<AppState>, headers: HeaderMap) -> &'static str {
    let trace_id = extract_trace_id(&headers).unwrap_or_default();
    tracing::info!(traceID = %trace_id, app = %state.identity, "hello page");
    HELLO_BODY
}

pub async fn post(State(state): State<AppState>, headers: HeaderMap) -> &'static str {
    let trace_id = extract_trace_id(&headers).unwrap_or_default();
    tracing::info!(traceID = %trace_id, app = %state.identity, "post page");
    POST_BODY
}

pub async fn web(State(state): State<AppState>, headers: HeaderMap) -> &'static str {
    let trace_id = extract_trace_id(&headers).unwrap_or_default();
    tracing::info!(traceID = %trace_id, app = %state.identity, "Web page");
    WEB_BODY
}

/// Prometheus scrape endpoint.
pub async fn metrics(State(state): State<AppState>) -> String {
    tracing::debug!(ops = state.ops.value(), "metrics scrape");
    state.metrics.render()
}
