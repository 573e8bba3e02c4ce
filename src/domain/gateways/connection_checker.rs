//! Connection Checker Gateway
//!
//! Abstract trait for checking that a client can reach its database.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::models::client::DatabaseClient;
use crate::shared::errors::ClientError;

/// Result of a reachability check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Round trip completed
    Reachable { latency: Duration },
    /// Nothing to check locally (managed proxy)
    Skipped,
}

#[async_trait]
pub trait ConnectionChecker: Send + Sync {
    async fn check(&self, client: &DatabaseClient) -> Result<CheckOutcome, ClientError>;
}
