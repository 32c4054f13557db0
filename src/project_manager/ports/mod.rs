//! Port contracts for project, task and user persistence.

pub mod repository;

pub use repository::{ProjectRepository, TaskRepository, UserRepository};
#[cfg(test)]
pub use repository::{MockProjectRepository, MockTaskRepository, MockUserRepository};
