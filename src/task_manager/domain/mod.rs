//! Domain model for the Task Manager API.

mod status;
mod task;

pub use status::TaskStatus;
pub use task::{Task, TaskFields, TaskPayload};
