//! In-memory task repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::common::TaskId;
use crate::persistence::{RepositoryError, RepositoryResult};
use crate::task_manager::{
    domain::{Task, TaskFields},
    ports::TaskRepository,
};

const ENTITY: &str = "task";

/// Thread-safe in-memory task repository.
///
/// Identifiers start at 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i32,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl InMemoryTaskState {
    fn check_parent(&self, fields: &TaskFields) -> RepositoryResult<()> {
        match fields.parent_id {
            Some(parent_id) if !self.tasks.contains_key(&parent_id) => Err(
                RepositoryError::ForeignKey(format!("parent task {parent_id} does not exist")),
            ),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> RepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| RepositoryError::poisoned(&err))?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| RepositoryError::poisoned(&err))?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn insert(
        &self,
        fields: &TaskFields,
        timestamp: DateTime<Utc>,
    ) -> RepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| RepositoryError::poisoned(&err))?;
        state.check_parent(fields)?;

        state.last_id += 1;
        let task = Task::new(TaskId::new(state.last_id), fields.clone(), timestamp);
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| RepositoryError::poisoned(&err))?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(RepositoryError::NotFound {
                entity: ENTITY,
                id: task.id().value(),
            });
        }
        state.check_parent(task.fields())?;
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| RepositoryError::poisoned(&err))?;
        if state.tasks.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity: ENTITY,
                id: id.value(),
            });
        }
        state
            .tasks
            .values_mut()
            .filter(|task| task.parent_id() == Some(id))
            .for_each(Task::clear_parent);
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let state = self.state.read().map_err(|err| RepositoryError::poisoned(&err))?;
        Ok(state.tasks.len() as u64)
    }
}
