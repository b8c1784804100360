//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: PostgreSQL adapter for the pokemon dataset
//! - HTTP: REST API routes and XML rendering
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
