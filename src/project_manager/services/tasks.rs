//! Service layer for project task CRUD operations.

use super::Repositories;
use crate::common::{ServiceError, ServiceResult, TaskId};
use crate::project_manager::domain::{Task, TaskFields, TaskPayload};
use mockable::Clock;
use std::sync::Arc;
use tracing::info;

const ENTITY: &str = "task";

/// Project task CRUD orchestration service.
#[derive(Clone)]
pub struct TaskService {
    repositories: Repositories,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TaskService {
    /// Creates a new task service.
    #[must_use]
    pub fn new(repositories: Repositories, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            repositories,
            clock,
        }
    }

    /// Returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> ServiceResult<Vec<Task>> {
        Ok(self.repositories.tasks.list().await?)
    }

    /// Returns one task.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the task does not exist.
    pub async fn get(&self, id: TaskId) -> ServiceResult<Task> {
        self.repositories
            .tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id.value()))
    }

    /// Validates and inserts a new task.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for an invalid payload and
    /// [`ServiceError::Repository`] when a reference does not resolve.
    pub async fn create(&self, payload: TaskPayload) -> ServiceResult<Task> {
        let fields = TaskFields::try_from(payload)?;
        let task = self
            .repositories
            .tasks
            .insert(&fields, self.clock.utc())
            .await?;
        info!(task_id = %task.id(), project_id = %task.project_id(), "task created");
        Ok(task)
    }

    /// Validates a payload and overwrites every editable column of a task.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for an invalid payload and
    /// [`ServiceError::NotFound`] when the task does not exist.
    pub async fn update(&self, id: TaskId, payload: TaskPayload) -> ServiceResult<Task> {
        let fields = TaskFields::try_from(payload)?;
        let mut task = self.get(id).await?;
        task.update_with(fields, self.clock.utc());
        self.repositories.tasks.update(&task).await?;
        info!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: TaskId) -> ServiceResult<()> {
        let task = self.get(id).await?;
        self.repositories.tasks.delete(task.id()).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }
}
