//! Environment-driven server configuration.

use std::net::{AddrParseError, Ipv4Addr, SocketAddr, SocketAddrV4};

use thiserror::Error;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "MENAGERIE_BIND_ADDR";

/// All interfaces, port 8080.
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Settings the server needs before it can bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: DEFAULT_BIND_ADDR,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's value
    /// or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => match value.trim().parse::<SocketAddr>() {
                Ok(addr) => addr,
                Err(source) => {
                    return Err(ConfigError::InvalidBindAddr {
                        var: BIND_ADDR_VAR,
                        value,
                        source,
                    })
                }
            },
            None => DEFAULT_BIND_ADDR,
        };

        Ok(ServerConfig { bind_addr })
    }
}
