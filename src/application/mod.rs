//! Application Layer
//!
//! Use cases and the client registry that owns the process's client handle.
//! Both depend on domain gateways (abstractions), not concrete implementations.

pub mod client_registry;
pub mod use_cases;

pub use client_registry::ClientRegistry;
