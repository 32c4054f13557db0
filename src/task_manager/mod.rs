//! Task Manager API: a single task table with parent/child nesting.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Axum handlers in [`http`]
//! - First-run sample data in [`seed`]

pub mod adapters;
pub mod domain;
pub mod http;
pub mod ports;
pub mod seed;
pub mod services;

mod bootstrap;

pub use bootstrap::bootstrap;

#[cfg(test)]
mod tests;
