//! Database Connection Management
//!
//! Builds the direct-mode PostgreSQL pool from a sanitized target.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{ConnectOptions, PgPool};
use tracing::log::LevelFilter;

use crate::domain::gateways::PoolFactory;
use crate::domain::models::connection::{DirectTarget, TlsPolicy};
use crate::domain::models::runtime_env::LogLevel;
use crate::domain::models::settings::PoolSettings;
use crate::shared::errors::ClientError;

/// Statements slower than this are reported when warnings are enabled
const SLOW_STATEMENT_THRESHOLD: Duration = Duration::from_secs(1);

/// Level for slow-statement reports: `Warn` when the environment logs
/// warnings, otherwise off
fn slow_statement_level(log_levels: &[LogLevel]) -> LevelFilter {
    if log_levels.contains(&LogLevel::Warn) {
        LevelFilter::Warn
    } else {
        LevelFilter::Off
    }
}

/// Translate a target into SQLx connect options
///
/// `RequireUnverified` maps to `PgSslMode::Require`, which encrypts without
/// checking the server certificate.
///
/// Individual statements are never logged. Slow statements are reported at
/// `warn` only when `log_levels` contains `Warn`, which is the development
/// environment. In test, production and unspecified environments slow-query
/// warnings are silenced as well, leaving only errors.
///
/// # Errors
///
/// Returns `ClientError::Database` if SQLx rejects the URL.
pub fn connect_options(
    target: &DirectTarget,
    log_levels: &[LogLevel],
) -> Result<PgConnectOptions, ClientError> {
    let ssl_mode = match target.tls_policy() {
        TlsPolicy::Disabled => PgSslMode::Disable,
        TlsPolicy::RequireUnverified => PgSslMode::Require,
    };

    let options = PgConnectOptions::from_str(target.url().as_str())?
        .ssl_mode(ssl_mode)
        .log_statements(LevelFilter::Off)
        .log_slow_statements(slow_statement_level(log_levels), SLOW_STATEMENT_THRESHOLD);

    Ok(options)
}

/// SQLx-backed pool factory
///
/// Pools are created lazily; the first query opens the first connection.
pub struct SqlxPoolFactory;

#[async_trait]
impl PoolFactory for SqlxPoolFactory {
    async fn create_pool(
        &self,
        target: &DirectTarget,
        settings: &PoolSettings,
        log_levels: &[LogLevel],
    ) -> Result<PgPool, ClientError> {
        let options = connect_options(target, log_levels)?;

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .acquire_timeout(settings.acquire_timeout)
            .idle_timeout(settings.idle_timeout)
            .connect_lazy_with(options);

        tracing::debug!(
            host = %target.host(),
            max_connections = settings.max_connections,
            "Database pool created"
        );

        Ok(pool)
    }
}
