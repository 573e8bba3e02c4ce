//! Health DTOs

use serde::{Deserialize, Serialize};

use crate::application::use_cases::ConnectionStatus;
use crate::domain::gateways::CheckOutcome;

/// Response DTO for the health endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponseDto {
    pub status: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<String>,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl From<ConnectionStatus> for HealthResponseDto {
    fn from(status: ConnectionStatus) -> Self {
        let (database, latency_ms) = match status.outcome {
            CheckOutcome::Reachable { latency } => (
                "reachable",
                Some(u64::try_from(latency.as_millis()).unwrap_or(u64::MAX)),
            ),
            CheckOutcome::Skipped => ("skipped", None),
        };

        Self {
            status: "ok".to_string(),
            mode: status.mode.as_str().to_string(),
            tls: status.tls.map(|tls| tls.as_str().to_string()),
            database: database.to_string(),
            latency_ms,
        }
    }
}
