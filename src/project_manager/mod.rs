//! Project Manager API: projects, their member users and their tasks.
//!
//! Same layering as [`crate::task_manager`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Axum handlers in [`http`]
//! - First-run sample data in [`seed`]
//!
//! Foreign keys follow one policy in both adapters: deleting a project
//! removes its tasks and detaches its members; deleting a user detaches the
//! tasks assigned to it and the project it manages; deleting a task detaches
//! its sub-tasks.

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
