//! Domain Models
//!
//! Value objects describing how the process connects to its database.

pub mod client;
pub mod connection;
pub mod runtime_env;
pub mod settings;

pub use client::DatabaseClient;
pub use connection::{ConnectionMode, ConnectionTarget, DirectTarget, ProxyEndpoint, TlsPolicy};
pub use runtime_env::{LogLevel, RuntimeEnv};
pub use settings::{ClientSettings, PoolSettings};
