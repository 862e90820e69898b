//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID and trace layers)
//!     → /poll, /stat → health::liveness
//!     → anything else → redirect handler
//!     → response.rs (status + Location, empty body)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::RedirectResponse;
pub use server::{HttpServer, ServerError};
