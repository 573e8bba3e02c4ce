//! Domain Layer
//!
//! Connection targets, client handles and the gateway traits (ports) used
//! to build and check them.

pub mod gateways;
pub mod models;

pub use gateways::{CheckOutcome, ConnectionChecker, PoolFactory};
pub use models::{
    ClientSettings, ConnectionMode, ConnectionTarget, DatabaseClient, PoolSettings, RuntimeEnv,
    TlsPolicy,
};
