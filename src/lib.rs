//! Workboard: task and project tracking web APIs.
//!
//! The crate hosts two HTTP services that share their plumbing:
//!
//! - **Task Manager** ([`task_manager`]): a single task table with
//!   parent/child nesting, served under `/Tasks`.
//! - **Project Manager** ([`project_manager`]): projects, member users and
//!   project tasks, served under `/Projects`, `/Users` and `/Tasks`, with
//!   relation navigation endpoints.
//!
//! # Architecture
//!
//! Each service follows hexagonal architecture principles:
//!
//! - **Domain**: entity records, payloads and validation
//! - **Ports**: async repository traits
//! - **Adapters**: an in-memory store and a Diesel-backed `PostgreSQL` store
//! - **Services**: orchestration of validation, persistence and row versions
//!
//! # Shared modules
//!
//! - [`api`]: extractors, response helpers and the JSON error envelope
//! - [`common`]: identifiers, priority, validation and service errors
//! - [`config`]: environment-driven service configuration
//! - [`persistence`]: repository errors and the `PostgreSQL` pool
//! - [`server`]: HTTP layers and the listener loop
//! - [`telemetry`]: `tracing` subscriber set-up

pub mod api;
pub mod common;
pub mod config;
pub mod persistence;
pub mod project_manager;
pub mod server;
pub mod task_manager;
pub mod telemetry;
