//! Database Client Handle
//!
//! The object the rest of the application uses to reach the database.

use sqlx::PgPool;

use super::connection::{ConnectionMode, DirectTarget, ProxyEndpoint, TlsPolicy};

/// Where queries go
#[derive(Debug, Clone)]
enum ClientBackend {
    ManagedProxy(ProxyEndpoint),
    Direct { pool: PgPool, target: DirectTarget },
}

/// Client handle built once per process
#[derive(Debug, Clone)]
pub struct DatabaseClient {
    backend: ClientBackend,
}

impl DatabaseClient {
    /// Client routed through the managed proxy; owns no pool
    #[must_use]
    pub fn managed_proxy(endpoint: ProxyEndpoint) -> Self {
        Self {
            backend: ClientBackend::ManagedProxy(endpoint),
        }
    }

    /// Client backed by a locally constructed pool
    #[must_use]
    pub fn direct(pool: PgPool, target: DirectTarget) -> Self {
        Self {
            backend: ClientBackend::Direct { pool, target },
        }
    }

    #[must_use]
    pub fn mode(&self) -> ConnectionMode {
        match self.backend {
            ClientBackend::ManagedProxy(_) => ConnectionMode::ManagedProxy,
            ClientBackend::Direct { .. } => ConnectionMode::Direct,
        }
    }

    /// The pool, present only for direct connections
    #[must_use]
    pub fn pool(&self) -> Option<&PgPool> {
        match &self.backend {
            ClientBackend::Direct { pool, .. } => Some(pool),
            ClientBackend::ManagedProxy(_) => None,
        }
    }

    /// TLS policy of the direct pool; the proxy manages its own transport
    #[must_use]
    pub fn tls_policy(&self) -> Option<TlsPolicy> {
        match &self.backend {
            ClientBackend::Direct { target, .. } => Some(target.tls_policy()),
            ClientBackend::ManagedProxy(_) => None,
        }
    }

    /// Close the underlying pool, if any
    pub async fn close(&self) {
        if let ClientBackend::Direct { pool, target } = &self.backend {
            tracing::info!(host = %target.host(), "Closing database pool");
            pool.close().await;
        }
    }
}
