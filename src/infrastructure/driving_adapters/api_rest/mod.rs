//! REST API Module
//!
//! Contains HTTP handlers and DTOs for the REST API.

pub mod dto;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::CheckConnectionUseCase;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub check_connection_use_case: Arc<CheckConnectionUseCase>,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/health", handlers::health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
