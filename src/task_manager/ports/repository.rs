//! Repository port for task persistence.

use crate::common::TaskId;
use crate::persistence::RepositoryResult;
use crate::task_manager::domain::{Task, TaskFields};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Task persistence contract.
///
/// Every mutating method is a single atomic commit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task ordered by identifier.
    async fn list(&self) -> RepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Inserts a new task and returns it with its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::persistence::RepositoryError::ForeignKey`] when the
    /// parent task does not exist.
    async fn insert(&self, fields: &TaskFields, timestamp: DateTime<Utc>)
    -> RepositoryResult<Task>;

    /// Overwrites an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`crate::persistence::RepositoryError::NotFound`] when the task
    /// does not exist, or `ForeignKey` when the parent does not exist.
    async fn update(&self, task: &Task) -> RepositoryResult<()>;

    /// Deletes a task, detaching its sub-tasks.
    ///
    /// # Errors
    ///
    /// Returns [`crate::persistence::RepositoryError::NotFound`] when the task
    /// does not exist.
    async fn delete(&self, id: TaskId) -> RepositoryResult<()>;

    /// Returns the number of stored tasks.
    async fn count(&self) -> RepositoryResult<u64>;
}
