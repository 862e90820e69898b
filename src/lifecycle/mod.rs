//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Read environment → Validate → Bind listener → Serve
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then the listener
//! - Configuration problems are never fatal; bind and serve errors are
//! - No shutdown coordination: the process serves until it is killed

pub mod startup;

pub use startup::{load, start, start_from_env};
