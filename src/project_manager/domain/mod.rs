//! Domain model for the Project Manager API.

mod project;
mod status;
mod task;
mod user;

pub use project::{Project, ProjectFields, ProjectPayload};
pub use status::Status;
pub use task::{Task, TaskFields, TaskPayload};
pub use user::{User, UserFields, UserPayload};
