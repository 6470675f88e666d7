//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the address to listen on.
pub const BIND_ADDR_VAR: &str = "METRO_BIND_ADDR";

/// Environment variable holding a network description file.
pub const NETWORK_FILE_VAR: &str = "METRO_NETWORK_FILE";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: expected host:port")]
    InvalidBindAddr { var: &'static str, value: String },
}

/// Configuration for the planner server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// Network description to load at startup.
    /// When unset, the built-in sample network is served.
    pub network_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup, falling back to
    /// defaults for anything unset or empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(value) = non_empty(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value,
                })?;
        }

        if let Some(value) = non_empty(NETWORK_FILE_VAR) {
            config.network_file = Some(PathBuf::from(value));
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network_file: None,
        }
    }
}
