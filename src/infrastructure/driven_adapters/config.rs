//! Application Configuration
//!
//! Loads configuration from defaults, files and environment variables.

use std::collections::HashMap;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::models::runtime_env::RuntimeEnv;
use crate::domain::models::settings::{ClientSettings, PoolSettings};

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Taken from `DATABASE_URL`; checked when the client is built
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<set>"))
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("idle_timeout_secs", &self.idle_timeout_secs)
            .finish()
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(self.idle_timeout_secs),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub environment: RuntimeEnv,
}

impl AppConfig {
    /// Load configuration from files and the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(std::env::vars().collect())
    }

    /// Load configuration from files and an explicit set of variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is malformed or a value has the wrong type.
    pub fn load_from(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let run_mode = vars.get("RUN_MODE").cloned().unwrap_or_else(|| "default".into());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 0)?
            .set_default("database.acquire_timeout_secs", 30)?
            .set_default("database.idle_timeout_secs", 10)?
            // Optional config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("database.url", vars.get("DATABASE_URL").cloned())?
            .set_override_option("environment", vars.get("NODE_ENV").cloned())?
            .build()?
            .try_deserialize()
    }

    /// Settings for building the database client
    #[must_use]
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings::new(self.database.url.clone(), self.environment)
            .with_pool(self.database.pool_settings())
    }
}
