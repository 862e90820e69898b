//! Configuration schema definitions.
//!
//! `RawConfig` is exactly what the environment handed us. `RedirectConfig` is
//! the validated form every handler reads from.

use axum::http::StatusCode;

/// Environment variable holding the bind host.
pub const ENV_LISTEN_ADDR: &str = "LISTEN_ADDR";
/// Environment variable holding the bind port.
pub const ENV_LISTEN_PORT: &str = "LISTEN_PORT";
/// Environment variable holding the redirect status code.
pub const ENV_REDIR_TYPE: &str = "REDIR_TYPE";
/// Environment variable holding the redirect target URL.
pub const ENV_REDIR_DEST: &str = "REDIR_DEST";

/// Port used when `LISTEN_PORT` is missing or not an integer.
pub const DEFAULT_LISTEN_PORT: &str = "1080";
/// Redirect code used when `REDIR_TYPE` is missing or unusable.
pub const DEFAULT_REDIRECT_CODE: StatusCode = StatusCode::FOUND;
/// Redirect target used when `REDIR_DEST` is empty.
pub const DEFAULT_DESTINATION: &str = "https://github.com/koepkeca/tinyRedirect";

/// Lowest accepted redirect status code.
pub const MIN_REDIRECT_CODE: i64 = 300;
/// Highest accepted redirect status code.
pub const MAX_REDIRECT_CODE: i64 = 309;

/// Unvalidated values read from the environment.
///
/// Unset variables are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    /// Bind host (`LISTEN_ADDR`).
    pub listen_addr: String,

    /// Bind port as text (`LISTEN_PORT`).
    pub listen_port: String,

    /// Redirect status code as text (`REDIR_TYPE`).
    pub redirect_type: String,

    /// Redirect target (`REDIR_DEST`).
    pub destination: String,
}

/// Validated configuration the server runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectConfig {
    /// `host:port` to listen on. An empty host means all interfaces.
    pub listen_endpoint: String,

    /// Status code sent with every redirect, always in 300..=309.
    pub redirect_code: StatusCode,

    /// Value of the `Location` header, never empty.
    pub destination: String,
}

impl RedirectConfig {
    /// Address handed to the socket resolver.
    ///
    /// An endpoint with an empty host (`":1080"`) binds the IPv6 unspecified
    /// address, which also accepts IPv4 clients on dual-stack hosts.
    pub fn bind_address(&self) -> String {
        if self.has_empty_host() {
            format!("[::]{}", self.listen_endpoint)
        } else {
            self.listen_endpoint.clone()
        }
    }

    /// IPv4-only address used when the host has no IPv6 support.
    pub fn fallback_bind_address(&self) -> Option<String> {
        self.has_empty_host()
            .then(|| format!("0.0.0.0{}", self.listen_endpoint))
    }

    fn has_empty_host(&self) -> bool {
        self.listen_endpoint.starts_with(':')
    }
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            listen_endpoint: format!(":{}", DEFAULT_LISTEN_PORT),
            redirect_code: DEFAULT_REDIRECT_CODE,
            destination: DEFAULT_DESTINATION.to_string(),
        }
    }
}
