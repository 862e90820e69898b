//! Liveness endpoint.
//!
//! Served on `/poll` and `/stat`. If the process can answer HTTP it is alive,
//! so the handler has no dependencies and ignores configuration.

use axum::http::StatusCode;

/// Paths answered by [`liveness`].
pub const HEALTH_PATHS: [&str; 2] = ["/poll", "/stat"];

/// Always `200 OK` with an empty body.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
