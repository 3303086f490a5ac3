//! REST server configuration.
//!
//! Resolved once at process startup and then passed into the server. Handlers never read
//! environment variables.

use std::net::SocketAddr;

/// Environment variable holding the REST listen address.
pub const REST_ADDR_ENV: &str = "VPR_LINKS_REST_ADDR";

/// Listen address used when `VPR_LINKS_REST_ADDR` is unset or blank.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid VPR_LINKS_REST_ADDR value {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// REST configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestConfig {
    addr: SocketAddr,
}

impl RestConfig {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(REST_ADDR_ENV).ok())
    }

    /// Builds the configuration from an optional raw address value.
    ///
    /// `None` or a blank value falls back to [`DEFAULT_REST_ADDR`].
    pub fn from_env_value(value: Option<String>) -> Result<Self, ConfigError> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_REST_ADDR.into());
        let addr = value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr { value, source })?;
        Ok(Self { addr })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}
