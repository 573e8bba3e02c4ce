//! Health Handlers
//!
//! Reports how the process is connected to its database.

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::HealthResponseDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for the health endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// GET /health - Database connection status
///
/// # Responses
///
/// * 200 OK - Client is built and the database answered (or is behind the proxy)
/// * 503 Service Unavailable - The database did not answer
async fn health(State(state): State<AppState>) -> Result<Json<HealthResponseDto>, ApiError> {
    let status = state.check_connection_use_case.execute().await?;

    Ok(Json(HealthResponseDto::from(status)))
}
