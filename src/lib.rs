//! Tiny HTTP redirector.
//!
//! Answers every request with a redirect to one configured destination and
//! exposes `/poll` and `/stat` for liveness checks. Configuration comes from
//! `LISTEN_ADDR`, `LISTEN_PORT`, `REDIR_TYPE` and `REDIR_DEST`.

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::{RawConfig, RedirectConfig};
pub use http::{HttpServer, ServerError};
