//! Application layer - Use cases and the ports they depend on
//!
//! This layer contains:
//! - Ports: Interfaces that infrastructure adapters implement
//! - Services: Use case implementations

pub mod ports;
pub mod services;
