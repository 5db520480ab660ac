//! Distributed tracing support.
//!
//! # Responsibilities
//! - Extract a trace identifier from inbound request headers
//!
//! # Design Decisions
//! - W3C Trace Context (`traceparent`) is checked first, then the Jaeger
//!   `uber-trace-id` header
//! - Extraction is read-only and best-effort; a missing or malformed header
//!   never fails the request

use axum::http::HeaderMap;

const TRACEPARENT: &str = "traceparent";
const UBER_TRACE_ID: &str = "uber-trace-id";

/// Extract the trace identifier propagated with a request, if any.
pub fn extract_trace_id(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(TRACEPARENT).and_then(|v| v.to_str().ok()) {
        if let Some(trace_id) = parse_traceparent(value) {
            return Some(trace_id);
        }
    }

    headers
        .get(UBER_TRACE_ID)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_uber_trace_id)
}

/// Parse the trace-id field of a W3C `traceparent` header.
///
/// Format: `{version:2}-{trace-id:32}-{parent-id:16}-{flags:2}`, all hex.
/// An all-zero trace-id is invalid and treated as absent.
fn parse_traceparent(value: &str) -> Option<String> {
    let mut parts = value.trim().split('-');
    let version = parts.next()?;
    let trace_id = parts.next()?;
    let parent_id = parts.next()?;
    let flags = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if version.len() != 2 || trace_id.len() != 32 || parent_id.len() != 16 || flags.len() != 2 {
        return None;
    }
    if !trace_id.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    if trace_id.bytes().all(|b| b == b'0') {
        return None;
    }
    Some(trace_id.to_ascii_lowercase())
}

/// Parse the trace-id field of a Jaeger `uber-trace-id` header.
///
/// Format: `{trace-id}:{span-id}:{parent-span-id}:{flags}`.
fn parse_uber_trace_id(value: &str) -> Option<String> {
    let trace_id = value.trim().split(':').next()?;
    if trace_id.is_empty() || !trace_id.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some(trace_id.to_ascii_lowercase())
}
