//! HTTP server settings loaded via OrthoConfig.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Raised when the configured bind address is not a socket address.
#[derive(Debug, Error)]
#[error("invalid bind address {value:?}: {source}")]
pub struct InvalidBindAddr {
    value: String,
    #[source]
    source: std::net::AddrParseError,
}

/// Configuration values for the HTTP listener.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACADEMY")]
pub struct ServerSettings {
    /// Socket address to listen on, e.g. `127.0.0.1:3000`.
    pub bind_addr: Option<String>,
}

impl ServerSettings {
    /// Return the parsed bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, InvalidBindAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.trim().parse().map_err(|source| InvalidBindAddr {
            value: raw.to_owned(),
            source,
        })
    }
}
