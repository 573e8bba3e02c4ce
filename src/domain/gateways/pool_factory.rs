//! Pool Factory Gateway
//!
//! Abstract trait for building the direct-mode connection pool.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::models::connection::DirectTarget;
use crate::domain::models::runtime_env::LogLevel;
use crate::domain::models::settings::PoolSettings;
use crate::shared::errors::ClientError;

/// Builds a pool for a sanitized direct target
#[async_trait]
pub trait PoolFactory: Send + Sync {
    /// Create a pool honoring the target's TLS policy and the environment's
    /// log levels
    async fn create_pool(
        &self,
        target: &DirectTarget,
        settings: &PoolSettings,
        log_levels: &[LogLevel],
    ) -> Result<PgPool, ClientError>;
}
