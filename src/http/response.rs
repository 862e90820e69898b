//! Response construction.
//!
//! # Responsibilities
//! - Build the redirect response from the configured code and destination
//! - Map an unencodable `Location` value to 500
//!
//! # Design Decisions
//! - Redirects carry an empty body
//! - The destination is sent verbatim, never resolved against the request

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// A redirect to a fixed location with a fixed status.
#[derive(Debug, Clone)]
pub struct RedirectResponse<'a> {
    pub status: StatusCode,
    pub location: &'a str,
}

impl<'a> RedirectResponse<'a> {
    pub fn new(status: StatusCode, location: &'a str) -> Self {
        Self { status, location }
    }
}

impl IntoResponse for RedirectResponse<'_> {
    fn into_response(self) -> Response {
        let location = match HeaderValue::from_str(self.location) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(
                    location = %self.location,
                    error = %e,
                    "Redirect destination is not a valid header value"
                );
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        let mut response = Response::new(Body::empty());
        *response.status_mut() = self.status;
        response.headers_mut().insert(header::LOCATION, location);
        response
    }
}
