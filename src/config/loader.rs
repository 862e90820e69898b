//! Configuration loading from the process environment.

use std::env;

use crate::config::schema::{
    RawConfig, ENV_LISTEN_ADDR, ENV_LISTEN_PORT, ENV_REDIR_DEST, ENV_REDIR_TYPE,
};

impl RawConfig {
    /// Read the four configuration variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a `RawConfig` from an arbitrary variable lookup.
    ///
    /// Missing variables become empty strings. Never fails.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).unwrap_or_default();

        Self {
            listen_addr: read(ENV_LISTEN_ADDR),
            listen_port: read(ENV_LISTEN_PORT),
            redirect_type: read(ENV_REDIR_TYPE),
            destination: read(ENV_REDIR_DEST),
        }
    }
}
