//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read LISTEN_ADDR, LISTEN_PORT, REDIR_TYPE, REDIR_DEST)
//!     → validation.rs (defaults and fallback warnings)
//!     → RedirectConfig (validated, immutable)
//!     → shared via Arc with the HTTP handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once parsed; a change requires a restart
//! - Every field has a default, so an empty environment is a valid config
//! - Validation never fails; it substitutes and reports

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::RawConfig;
pub use schema::RedirectConfig;
pub use validation::ConfigWarning;
