//! Create Client Use Case
//!
//! Builds a database client from a connection string.

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::gateways::PoolFactory;
use crate::domain::models::client::DatabaseClient;
use crate::domain::models::connection::ConnectionTarget;
use crate::domain::models::settings::ClientSettings;
use crate::shared::errors::{ClientError, UseCaseError};

/// Use case for constructing a client handle
pub struct CreateClientUseCase {
    pool_factory: Arc<dyn PoolFactory>,
}

impl CreateClientUseCase {
    /// Create a new CreateClientUseCase
    #[must_use]
    pub fn new(pool_factory: Arc<dyn PoolFactory>) -> Self {
        Self { pool_factory }
    }

    /// Execute the use case
    ///
    /// A `retained_pool` is reused instead of building a new one when the
    /// connection string selects direct mode.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingConnectionString` if no URL is configured.
    /// Returns `ClientError::InvalidUrl` if the URL cannot be parsed.
    /// Returns `ClientError::Database` if the pool library rejects the target.
    pub async fn execute(
        &self,
        settings: &ClientSettings,
        retained_pool: Option<PgPool>,
    ) -> Result<DatabaseClient, UseCaseError> {
        let raw_url = settings.database_url().ok_or_else(|| {
            tracing::error!("DATABASE_URL is not defined");
            ClientError::MissingConnectionString
        })?;

        match ConnectionTarget::parse(raw_url)? {
            ConnectionTarget::ManagedProxy(endpoint) => {
                tracing::info!(host = %endpoint.host(), "Using managed connection proxy");
                Ok(DatabaseClient::managed_proxy(endpoint))
            }
            ConnectionTarget::Direct(target) => {
                let pool = match retained_pool {
                    Some(pool) => {
                        tracing::debug!(host = %target.host(), "Reusing retained database pool");
                        pool
                    }
                    None => {
                        tracing::info!(
                            url = %target.redacted(),
                            tls = %target.tls_policy().as_str(),
                            "Creating database pool"
                        );
                        self.pool_factory
                            .create_pool(&target, &settings.pool, settings.runtime_env.log_levels())
                            .await?
                    }
                };

                Ok(DatabaseClient::direct(pool, target))
            }
        }
    }
}
