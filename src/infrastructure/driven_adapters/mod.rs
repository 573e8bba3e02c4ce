//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database pool construction
//! - Connection probing
//! - Configuration

pub mod config;
pub mod connection_checker;
pub mod database;

pub use config::AppConfig;
pub use connection_checker::PostgresConnectionChecker;
pub use database::SqlxPoolFactory;
