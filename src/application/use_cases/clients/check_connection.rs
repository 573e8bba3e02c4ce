//! Check Connection Use Case
//!
//! Reports how the process is connected and whether the database answers.

use std::sync::Arc;

use crate::domain::gateways::{CheckOutcome, ConnectionChecker};
use crate::domain::models::client::DatabaseClient;
use crate::domain::models::connection::{ConnectionMode, TlsPolicy};
use crate::shared::errors::UseCaseError;

/// Snapshot of the client's connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub mode: ConnectionMode,
    pub tls: Option<TlsPolicy>,
    pub outcome: CheckOutcome,
}

/// Use case for checking database reachability
pub struct CheckConnectionUseCase {
    client: Arc<DatabaseClient>,
    checker: Arc<dyn ConnectionChecker>,
}

impl CheckConnectionUseCase {
    /// Create a new CheckConnectionUseCase
    #[must_use]
    pub fn new(client: Arc<DatabaseClient>, checker: Arc<dyn ConnectionChecker>) -> Self {
        Self { client, checker }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unavailable` if the check fails.
    pub async fn execute(&self) -> Result<ConnectionStatus, UseCaseError> {
        let outcome = self.checker.check(&self.client).await.map_err(|e| {
            tracing::warn!(error = %e, mode = %self.client.mode(), "Database check failed");
            UseCaseError::Unavailable(e.to_string())
        })?;

        tracing::debug!(?outcome, "Database check completed");

        Ok(ConnectionStatus {
            mode: self.client.mode(),
            tls: self.client.tls_policy(),
            outcome,
        })
    }
}
