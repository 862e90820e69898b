//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: a bind or serve error ends startup
//! - Configuration fallbacks are logged, not returned

use std::convert::Infallible;

use crate::config::{RawConfig, RedirectConfig};
use crate::http::{HttpServer, ServerError};
use crate::observability::logging::{TracingSink, WarningSink};

/// Read the process environment and serve until a fatal error.
pub async fn start_from_env() -> Result<Infallible, ServerError> {
    let config = load(&RawConfig::from_env(), &TracingSink);
    start(config).await
}

/// Validate `raw`, reporting fallbacks to `sink`, and log the result.
pub fn load(raw: &RawConfig, sink: &dyn WarningSink) -> RedirectConfig {
    let config = raw.parse(sink);

    tracing::info!(
        listen_endpoint = %config.listen_endpoint,
        redirect_code = config.redirect_code.as_u16(),
        destination = %config.destination,
        "Configuration loaded"
    );

    config
}

/// Bind and serve with an already validated configuration.
pub async fn start(config: RedirectConfig) -> Result<Infallible, ServerError> {
    let server = HttpServer::new(config);
    let listener = server.bind().await?;
    server.run(listener).await
}
