//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TODO_BACKEND_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence order.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use backend::outbound::persistence::DEFAULT_MAX_CONNECTIONS;
use backend::outbound::security::DEFAULT_BCRYPT_COST;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings controlling the listener, persistence, and password hashing.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODO_BACKEND")]
pub struct ServerSettings {
    /// PostgreSQL connection URL. Without one the server keeps data in memory.
    pub database_url: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// bcrypt work factor for new digests.
    pub bcrypt_cost: Option<u32>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

/// Raised when a configured value cannot be used.
#[derive(Debug, thiserror::Error)]
#[error("invalid bind address {value:?}: {source}")]
pub struct BindAddrError {
    value: String,
    #[source]
    source: std::net::AddrParseError,
}

impl ServerSettings {
    /// Database URL with blank values treated as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Parsed listener address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`BindAddrError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, BindAddrError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| BindAddrError {
            value: value.to_owned(),
            source,
        })
    }

    /// Configured bcrypt cost, falling back to the library default.
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST)
    }

    /// Configured pool size, falling back to the adapter default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }
}
