//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use backend::outbound::persistence::DbPool;
use backend::outbound::security::BcryptPasswordHasher;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) hasher: BcryptPasswordHasher,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration without persistence.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, hasher: BcryptPasswordHasher) -> Self {
        Self {
            bind_addr,
            hasher,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// Without one, repositories live in process memory and are lost on exit.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
