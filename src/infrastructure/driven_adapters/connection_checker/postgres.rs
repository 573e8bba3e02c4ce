//! PostgreSQL Connection Checker
//!
//! Implements the ConnectionChecker trait with a `SELECT 1` round trip.

use std::time::Instant;

use async_trait::async_trait;

use crate::domain::gateways::{CheckOutcome, ConnectionChecker};
use crate::domain::models::client::DatabaseClient;
use crate::shared::errors::ClientError;

/// Checks the direct pool; proxy clients are skipped
pub struct PostgresConnectionChecker;

#[async_trait]
impl ConnectionChecker for PostgresConnectionChecker {
    async fn check(&self, client: &DatabaseClient) -> Result<CheckOutcome, ClientError> {
        let Some(pool) = client.pool() else {
            return Ok(CheckOutcome::Skipped);
        };

        let started = Instant::now();
        sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;

        Ok(CheckOutcome::Reachable {
            latency: started.elapsed(),
        })
    }
}
