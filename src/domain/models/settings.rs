//! Client Settings
//!
//! Everything needed to build a client, resolved from configuration.

use std::time::Duration;

use super::runtime_env::RuntimeEnv;

/// Pool sizing and timeouts for direct connections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 0,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(10),
        }
    }
}

/// Inputs for client construction
#[derive(Clone)]
pub struct ClientSettings {
    /// Raw connection string; `None` when `DATABASE_URL` is unset
    pub database_url: Option<String>,
    pub runtime_env: RuntimeEnv,
    pub pool: PoolSettings,
}

impl ClientSettings {
    #[must_use]
    pub fn new(database_url: Option<String>, runtime_env: RuntimeEnv) -> Self {
        Self {
            database_url,
            runtime_env,
            pool: PoolSettings::default(),
        }
    }

    #[must_use]
    pub fn with_pool(mut self, pool: PoolSettings) -> Self {
        self.pool = pool;
        self
    }

    /// The connection string, treating blank values as missing
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

impl std::fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSettings")
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("runtime_env", &self.runtime_env)
            .field("pool", &self.pool)
            .finish()
    }
}
