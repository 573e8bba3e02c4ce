//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container and
//! building a client registry and router against it.

use std::sync::Arc;

use axum::Router;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use kivant_db::application::use_cases::CheckConnectionUseCase;
use kivant_db::application::ClientRegistry;
use kivant_db::domain::models::{ClientSettings, DatabaseClient, RuntimeEnv};
use kivant_db::infrastructure::driven_adapters::{PostgresConnectionChecker, SqlxPoolFactory};
use kivant_db::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Running PostgreSQL container and its connection string
pub struct TestDatabase {
    pub url: String,
    _container: ContainerAsync<Postgres>,
}

impl TestDatabase {
    /// Start a fresh PostgreSQL container
    pub async fn start() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

        Self {
            url,
            _container: container,
        }
    }
}

/// Registry backed by the real SQLx pool factory
pub fn build_registry(url: &str, env: RuntimeEnv) -> ClientRegistry {
    ClientRegistry::new(
        ClientSettings::new(Some(url.to_string()), env),
        Arc::new(SqlxPoolFactory),
    )
}

/// Router wired the same way `main` wires it
pub fn router_for(client: Arc<DatabaseClient>) -> Router {
    let check_connection_use_case = Arc::new(CheckConnectionUseCase::new(
        client,
        Arc::new(PostgresConnectionChecker),
    ));

    api_rest::router(AppState {
        check_connection_use_case,
    })
}
