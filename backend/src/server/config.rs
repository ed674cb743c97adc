//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use job_offers::domain::ports::{FixtureRemoteOfferSource, RemoteOfferSource};
use job_offers::outbound::persistence::DbPool;

/// Builder-style configuration for wiring adapters and the HTTP listener.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) remote_source: Arc<dyn RemoteOfferSource>,
}

impl ServerConfig {
    /// Construct a configuration with in-memory storage and an empty remote
    /// source.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            remote_source: Arc::new(FixtureRemoteOfferSource::default()),
        }
    }

    /// Attach a database connection pool; offers are then stored in PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Replace the remote offer source used by syncs.
    #[must_use]
    pub fn with_remote_source(mut self, source: Arc<dyn RemoteOfferSource>) -> Self {
        self.remote_source = source;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
