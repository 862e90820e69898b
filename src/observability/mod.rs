//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config validation → WarningSink (fallback warnings)
//! request handling  → tracing events + tower-http request spans
//!     → fmt subscriber on stdout, filtered by RUST_LOG
//! ```

pub mod logging;

pub use logging::{init_logging, RecordingSink, TracingSink, WarningSink};
