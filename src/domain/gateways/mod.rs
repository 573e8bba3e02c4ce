//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod connection_checker;
pub mod pool_factory;

pub use connection_checker::{CheckOutcome, ConnectionChecker};
pub use pool_factory::PoolFactory;
