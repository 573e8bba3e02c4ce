//! Client Registry
//!
//! Owns the process's database client and pool handles. Created by the
//! startup routine and passed to whatever needs a client.
//!
//! Outside production both handles are retained, so repeated calls return
//! the same client. In production nothing is retained and each call builds
//! a new client that the caller owns.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::Mutex;

use crate::application::use_cases::CreateClientUseCase;
use crate::domain::gateways::PoolFactory;
use crate::domain::models::client::DatabaseClient;
use crate::domain::models::runtime_env::RuntimeEnv;
use crate::domain::models::settings::ClientSettings;
use crate::shared::errors::UseCaseError;

#[derive(Default)]
struct RetainedHandles {
    client: Option<Arc<DatabaseClient>>,
    pool: Option<PgPool>,
}

/// Explicit holder for the client handle and its pool
pub struct ClientRegistry {
    settings: ClientSettings,
    create_client: CreateClientUseCase,
    retained: Mutex<RetainedHandles>,
}

impl ClientRegistry {
    #[must_use]
    pub fn new(settings: ClientSettings, pool_factory: Arc<dyn PoolFactory>) -> Self {
        Self {
            settings,
            create_client: CreateClientUseCase::new(pool_factory),
            retained: Mutex::new(RetainedHandles::default()),
        }
    }

    #[must_use]
    pub fn runtime_env(&self) -> RuntimeEnv {
        self.settings.runtime_env
    }

    /// Return the retained client, building it on first use
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Client` if construction fails.
    pub async fn client(&self) -> Result<Arc<DatabaseClient>, UseCaseError> {
        let mut retained = self.retained.lock().await;

        if let Some(client) = &retained.client {
            tracing::debug!(mode = %client.mode(), "Reusing retained database client");
            return Ok(Arc::clone(client));
        }

        self.build(&mut retained).await
    }

    /// Drop the retained client and build a new one, keeping the pool
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Client` if construction fails.
    pub async fn reload(&self) -> Result<Arc<DatabaseClient>, UseCaseError> {
        let mut retained = self.retained.lock().await;
        retained.client = None;

        tracing::info!(
            env = %self.settings.runtime_env,
            pool_retained = retained.pool.is_some(),
            "Reloading database client"
        );

        self.build(&mut retained).await
    }

    /// Release retained handles and close the retained pool
    pub async fn shutdown(&self) {
        let (client, pool) = {
            let mut retained = self.retained.lock().await;
            (retained.client.take(), retained.pool.take())
        };

        match (pool, client) {
            (Some(pool), _) => {
                tracing::info!("Closing retained database pool");
                pool.close().await;
            }
            (None, Some(client)) => client.close().await,
            (None, None) => tracing::debug!("No retained database handles to release"),
        }
    }

    async fn build(&self, retained: &mut RetainedHandles) -> Result<Arc<DatabaseClient>, UseCaseError> {
        let client = Arc::new(
            self.create_client
                .execute(&self.settings, retained.pool.clone())
                .await?,
        );

        if self.settings.runtime_env.retains_handles() {
            retained.pool = client.pool().cloned();
            retained.client = Some(Arc::clone(&client));
        }

        tracing::info!(
            mode = %client.mode(),
            env = %self.settings.runtime_env,
            retained = self.settings.runtime_env.retains_handles(),
            "Database client ready"
        );

        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::connection::DirectTarget;
    use crate::domain::models::runtime_env::LogLevel;
    use crate::domain::models::settings::PoolSettings;
    use crate::shared::errors::ClientError;
    use async_trait::async_trait;
    use sqlx::postgres::PgPoolOptions;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const DIRECT_URL: &str = "postgres://app:pw@db.example.com/app?sslmode=require";

    struct MockPoolFactory {
        calls: AtomicUsize,
    }

    impl MockPoolFactory {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PoolFactory for MockPoolFactory {
        async fn create_pool(
            &self,
            target: &DirectTarget,
            _settings: &PoolSettings,
            _log_levels: &[LogLevel],
        ) -> Result<PgPool, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(PgPoolOptions::new().connect_lazy(target.url().as_str())?)
        }
    }

    fn registry(url: Option<&str>, env: RuntimeEnv) -> (ClientRegistry, Arc<MockPoolFactory>) {
        let factory = Arc::new(MockPoolFactory::new());
        let settings = ClientSettings::new(url.map(ToString::to_string), env);
        (ClientRegistry::new(settings, factory.clone()), factory)
    }

    #[tokio::test]
    async fn should_return_same_client_outside_production() {
        for env in [RuntimeEnv::Development, RuntimeEnv::Test, RuntimeEnv::Unspecified] {
            let (registry, factory) = registry(Some(DIRECT_URL), env);

            let first = registry.client().await.unwrap();
            let second = registry.client().await.unwrap();

            assert!(Arc::ptr_eq(&first, &second), "{env}");
            assert_eq!(factory.calls(), 1);
        }
    }

    #[tokio::test]
    async fn should_build_new_client_each_call_in_production() {
        let (registry, factory) = registry(Some(DIRECT_URL), RuntimeEnv::Production);

        let first = registry.client().await.unwrap();
        let second = registry.client().await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(factory.calls(), 2);
    }

    #[tokio::test]
    async fn should_fail_fast_without_database_url() {
        let (registry, factory) = registry(None, RuntimeEnv::Development);

        let result = registry.client().await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::Client(ClientError::MissingConnectionString)
        ));
        assert_eq!(factory.calls(), 0);
    }

    #[tokio::test]
    async fn should_not_retain_failed_construction() {
        let (registry, _factory) = registry(Some("::bad::"), RuntimeEnv::Development);

        assert!(registry.client().await.is_err());
        assert!(registry.client().await.is_err());
    }

    #[tokio::test]
    async fn should_reuse_pool_on_reload() {
        let (registry, factory) = registry(Some(DIRECT_URL), RuntimeEnv::Development);

        let first = registry.client().await.unwrap();
        let reloaded = registry.reload().await.unwrap();

        assert!(!Arc::ptr_eq(&first, &reloaded));
        assert_eq!(factory.calls(), 1);
        assert!(Arc::ptr_eq(&reloaded, &registry.client().await.unwrap()));
    }

    #[tokio::test]
    async fn should_close_retained_pool_on_shutdown() {
        let (registry, factory) = registry(Some(DIRECT_URL), RuntimeEnv::Development);

        let client = registry.client().await.unwrap();
        registry.shutdown().await;

        assert!(client.pool().unwrap().is_closed());

        // A later call starts over with a fresh pool.
        let fresh = registry.client().await.unwrap();
        assert!(!fresh.pool().unwrap().is_closed());
        assert_eq!(factory.calls(), 2);

        registry.shutdown().await;
        registry.shutdown().await;
    }

    #[tokio::test]
    async fn should_share_one_construction_between_concurrent_callers() {
        let (registry, factory) = registry(Some(DIRECT_URL), RuntimeEnv::Development);
        let registry = Arc::new(registry);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                tokio::spawn(async move { registry.client().await.unwrap() })
            })
            .collect();

        let mut clients = Vec::new();
        for handle in handles {
            clients.push(handle.await.unwrap());
        }

        assert!(clients.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
        assert_eq!(factory.calls(), 1);
    }

    #[tokio::test]
    async fn should_retain_proxy_client_without_pool() {
        let (registry, factory) = registry(
            Some("prisma://accelerate.prisma-data.net/?api_key=key"),
            RuntimeEnv::Development,
        );

        let first = registry.client().await.unwrap();
        let second = registry.client().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.pool().is_none());
        assert_eq!(factory.calls(), 0);

        registry.shutdown().await;
    }
}
