//! Kivant Database Client Bootstrap
//!
//! Builds the process's database client from `DATABASE_URL`, choosing
//! between the managed connection proxy and a locally pooled Postgres
//! connection, and owns that client for the life of the process.
//! Laid out along Clean/Hexagonal Architecture lines.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
