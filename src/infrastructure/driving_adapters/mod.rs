//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers
//! - DTOs for responses

pub mod api_rest;
