//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Provide the sink configuration fallbacks are reported through
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Log level configurable via `RUST_LOG`
//! - Validation never logs directly; it reports to a `WarningSink` so callers
//!   decide where warnings go

use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::validation::ConfigWarning;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "tiny_redirect=info,tower_http=info";

/// Install the global tracing subscriber.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Receives configuration fallback warnings.
pub trait WarningSink: Send + Sync {
    /// Record a single fallback.
    fn warn(&self, warning: &ConfigWarning);
}

/// Sink that emits each warning as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, warning: &ConfigWarning) {
        tracing::warn!(variable = warning.variable(), "{}", warning);
    }
}

/// Sink that keeps every warning in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    warnings: Mutex<Vec<ConfigWarning>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings recorded so far, in order.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        match self.warnings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, warning: &ConfigWarning) {
        match self.warnings.lock() {
            Ok(mut guard) => guard.push(warning.clone()),
            Err(poisoned) => poisoned.into_inner().push(warning.clone()),
        }
    }
}
