//! Task management core for Taskboard.
//!
//! This module implements the full task use-case surface: validated task
//! creation, lookup by identifier, listing in insertion order, partial
//! updates that protect the immutable identity fields, and deletion with a
//! post-condition check. Every outcome crosses the service boundary inside a
//! uniform response envelope. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
