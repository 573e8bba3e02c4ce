//! Client Use Cases
//!
//! Building the database client and checking its connection.

mod check_connection;
mod create_client;

pub use check_connection::{CheckConnectionUseCase, ConnectionStatus};
pub use create_client::CreateClientUseCase;
