//! Configuration validation.
//!
//! # Responsibilities
//! - Build the listen endpoint from address and port
//! - Check the redirect code against the 3xx range we accept
//! - Pick the redirect destination
//!
//! # Design Decisions
//! - Nothing here is fatal: every bad input falls back to a default
//! - Each fallback is reported as a distinct `ConfigWarning`
//! - The three fields are validated independently

use axum::http::StatusCode;
use thiserror::Error;

use crate::config::schema::{
    RawConfig, RedirectConfig, DEFAULT_DESTINATION, DEFAULT_LISTEN_PORT, DEFAULT_REDIRECT_CODE,
    ENV_LISTEN_PORT, ENV_REDIR_DEST, ENV_REDIR_TYPE, MAX_REDIRECT_CODE, MIN_REDIRECT_CODE,
};
use crate::observability::logging::WarningSink;

/// A configuration value that was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("port number missing, defaulting to {port}", port = DEFAULT_LISTEN_PORT)]
    PortMissing,

    #[error("port number {0:?} is not an integer, defaulting to {port}", port = DEFAULT_LISTEN_PORT)]
    PortInvalid(String),

    #[error("redirect type missing, defaulting to {code}", code = DEFAULT_REDIRECT_CODE.as_u16())]
    RedirectTypeMissing,

    #[error(
        "invalid redirect type {0:?}, defaulting to {code}",
        code = DEFAULT_REDIRECT_CODE.as_u16()
    )]
    RedirectTypeInvalid(String),

    #[error(
        "redirect code {0} out of bounds, defaulting to {code}",
        code = DEFAULT_REDIRECT_CODE.as_u16()
    )]
    RedirectTypeOutOfRange(i64),

    #[error("redirect destination missing, defaulting to {url}", url = DEFAULT_DESTINATION)]
    DestinationMissing,
}

impl ConfigWarning {
    /// Environment variable the warning is about.
    pub fn variable(&self) -> &'static str {
        match self {
            ConfigWarning::PortMissing | ConfigWarning::PortInvalid(_) => ENV_LISTEN_PORT,
            ConfigWarning::RedirectTypeMissing
            | ConfigWarning::RedirectTypeInvalid(_)
            | ConfigWarning::RedirectTypeOutOfRange(_) => ENV_REDIR_TYPE,
            ConfigWarning::DestinationMissing => ENV_REDIR_DEST,
        }
    }
}

impl RawConfig {
    /// Validate into a `RedirectConfig`, reporting fallbacks to `sink`.
    pub fn parse(&self, sink: &dyn WarningSink) -> RedirectConfig {
        RedirectConfig {
            listen_endpoint: validate_listen_endpoint(&self.listen_addr, &self.listen_port, sink),
            redirect_code: validate_redirect_code(&self.redirect_type, sink),
            destination: validate_destination(&self.destination, sink),
        }
    }
}

/// Join host and port into `host:port`.
///
/// The port text is kept verbatim when it parses as an integer, so `-1` and
/// `0` pass through unchanged. Anything else becomes the default port.
pub fn validate_listen_endpoint(addr: &str, port: &str, sink: &dyn WarningSink) -> String {
    let port = if port.is_empty() {
        sink.warn(&ConfigWarning::PortMissing);
        DEFAULT_LISTEN_PORT
    } else if port.parse::<i64>().is_err() {
        sink.warn(&ConfigWarning::PortInvalid(port.to_string()));
        DEFAULT_LISTEN_PORT
    } else {
        port
    };

    format!("{}:{}", addr, port)
}

/// Parse the redirect status code, accepting only 300..=309.
pub fn validate_redirect_code(raw: &str, sink: &dyn WarningSink) -> StatusCode {
    if raw.is_empty() {
        sink.warn(&ConfigWarning::RedirectTypeMissing);
        return DEFAULT_REDIRECT_CODE;
    }

    let code = match raw.parse::<i64>() {
        Ok(code) => code,
        Err(_) => {
            sink.warn(&ConfigWarning::RedirectTypeInvalid(raw.to_string()));
            return DEFAULT_REDIRECT_CODE;
        }
    };

    if !(MIN_REDIRECT_CODE..=MAX_REDIRECT_CODE).contains(&code) {
        sink.warn(&ConfigWarning::RedirectTypeOutOfRange(code));
        return DEFAULT_REDIRECT_CODE;
    }

    StatusCode::from_u16(code as u16).unwrap_or(DEFAULT_REDIRECT_CODE)
}

/// Use the configured destination verbatim, or the default when empty.
pub fn validate_destination(raw: &str, sink: &dyn WarningSink) -> String {
    if raw.is_empty() {
        sink.warn(&ConfigWarning::DestinationMissing);
        DEFAULT_DESTINATION.to_string()
    } else {
        raw.to_string()
    }
}
