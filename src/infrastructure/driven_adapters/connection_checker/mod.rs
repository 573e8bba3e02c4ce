//! Connection Checker Implementations

mod postgres;

pub use postgres::PostgresConnectionChecker;
