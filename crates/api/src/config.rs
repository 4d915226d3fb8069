//! Process configuration, read from the environment.

use std::num::ParseIntError;

use thiserror::Error;

pub const HOST_VAR: &str = "ITEMSTORE_HOST";
pub const PORT_VAR: &str = "PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}: {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Listen address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            let host = host.trim();
            if host.is_empty() {
                return Err(ConfigError::Empty(HOST_VAR));
            }
            config.host = host.to_string();
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value: port.clone(),
                    source,
                })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
