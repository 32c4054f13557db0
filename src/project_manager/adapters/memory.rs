//! In-memory store for projects, tasks and users.
//!
//! One lock guards all three tables so that cascades and reference checks
//! observe a consistent snapshot, mirroring the foreign keys of the
//! `PostgreSQL` schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::common::{ProjectId, TaskId, UserId};
use crate::persistence::{RepositoryError, RepositoryResult};
use crate::project_manager::{
    domain::{Project, ProjectFields, Task, TaskFields, User, UserFields},
    ports::{ProjectRepository, TaskRepository, UserRepository},
};

/// Thread-safe in-memory store implementing every Project Manager port.
///
/// Clones share the same tables. Identifiers start at 1 per table and are
/// never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    tasks: BTreeMap<TaskId, Task>,
    projects: BTreeMap<ProjectId, Project>,
    users: BTreeMap<UserId, User>,
    last_task_id: i32,
    last_project_id: i32,
    last_user_id: i32,
}

impl InMemoryProjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|err| RepositoryError::poisoned(&err))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|err| RepositoryError::poisoned(&err))
    }
}

fn missing_reference(what: &str, id: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::ForeignKey(format!("{what} {id} does not exist"))
}

impl StoreState {
    fn check_task_references(&self, fields: &TaskFields) -> RepositoryResult<()> {
        if !self.projects.contains_key(&fields.project_id) {
            return Err(missing_reference("project", fields.project_id));
        }
        if let Some(parent_id) = fields.parent_id
            && !self.tasks.contains_key(&parent_id)
        {
            return Err(missing_reference("parent task", parent_id));
        }
        if let Some(user_id) = fields.user_id
            && !self.users.contains_key(&user_id)
        {
            return Err(missing_reference("user", user_id));
        }
        Ok(())
    }

    fn check_project_references(
        &self,
        fields: &ProjectFields,
        own_id: Option<ProjectId>,
    ) -> RepositoryResult<()> {
        let Some(manager_id) = fields.manager_id else {
            return Ok(());
        };
        if !self.users.contains_key(&manager_id) {
            return Err(missing_reference("manager", manager_id));
        }
        let already_managing = self.projects.values().any(|project| {
            project.manager_id() == Some(manager_id) && Some(project.id()) != own_id
        });
        if already_managing {
            return Err(RepositoryError::Duplicate(format!(
                "user {manager_id} already manages a project"
            )));
        }
        Ok(())
    }

    fn check_user_references(
        &self,
        fields: &UserFields,
        own_id: Option<UserId>,
    ) -> RepositoryResult<()> {
        if let Some(project_id) = fields.project_id
            && !self.projects.contains_key(&project_id)
        {
            return Err(missing_reference("project", project_id));
        }
        let taken = self
            .users
            .values()
            .any(|user| {
                user.employee_id().eq_ignore_ascii_case(&fields.employee_id)
                    && Some(user.id()) != own_id
            });
        if taken {
            return Err(RepositoryError::Duplicate(format!(
                "employee id {} is already in use",
                fields.employee_id
            )));
        }
        Ok(())
    }

    fn remove_task(&mut self, id: TaskId) -> bool {
        if self.tasks.remove(&id).is_none() {
            return false;
        }
        self.tasks
            .values_mut()
            .filter(|task| task.parent_id() == Some(id))
            .for_each(Task::clear_parent);
        true
    }
}

fn not_found(entity: &'static str, id: i32) -> RepositoryError {
    RepositoryError::NotFound { entity, id }
}

#[async_trait]
impl TaskRepository for InMemoryProjectStore {
    async fn list(&self) -> RepositoryResult<Vec<Task>> {
        Ok(self.read()?.tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        Ok(self.read()?.tasks.get(&id).cloned())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn list_by_user(&self, user_id: UserId) -> RepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.user_id() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn insert(
        &self,
        fields: &TaskFields,
        timestamp: DateTime<Utc>,
    ) -> RepositoryResult<Task> {
        let mut state = self.write()?;
        state.check_task_references(fields)?;

        state.last_task_id += 1;
        let task = Task::new(TaskId::new(state.last_task_id), fields.clone(), timestamp);
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let mut state = self.write()?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(not_found("task", task.id().value()));
        }
        state.check_task_references(task.fields())?;
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        let mut state = self.write()?;
        if state.remove_task(id) {
            Ok(())
        } else {
            Err(not_found("task", id.value()))
        }
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.read()?.tasks.len() as u64)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectStore {
    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        Ok(self.read()?.projects.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        Ok(self.read()?.projects.get(&id).cloned())
    }

    async fn find_by_manager(&self, manager_id: UserId) -> RepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state
            .projects
            .values()
            .find(|project| project.manager_id() == Some(manager_id))
            .cloned())
    }

    async fn insert(
        &self,
        fields: &ProjectFields,
        timestamp: DateTime<Utc>,
    ) -> RepositoryResult<Project> {
        let mut state = self.write()?;
        state.check_project_references(fields, None)?;

        state.last_project_id += 1;
        let project = Project::new(
            ProjectId::new(state.last_project_id),
            fields.clone(),
            timestamp,
        );
        state.projects.insert(project.id(), project.clone());
        Ok(project)
    }

    async fn update(&self, project: &Project) -> RepositoryResult<()> {
        let mut state = self.write()?;
        if !state.projects.contains_key(&project.id()) {
            return Err(not_found("project", project.id().value()));
        }
        state.check_project_references(project.fields(), Some(project.id()))?;
        // Loaded tasks live in their own table.
        let stored = Project::new(project.id(), project.fields().clone(), project.timestamp());
        state.projects.insert(project.id(), stored);
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> RepositoryResult<()> {
        let mut state = self.write()?;
        if state.projects.remove(&id).is_none() {
            return Err(not_found("project", id.value()));
        }
        let owned: Vec<TaskId> = state
            .tasks
            .values()
            .filter(|task| task.project_id() == id)
            .map(Task::id)
            .collect();
        for task_id in owned {
            state.remove_task(task_id);
        }
        state
            .users
            .values_mut()
            .filter(|user| user.project_id() == Some(id))
            .for_each(User::clear_project);
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.read()?.projects.len() as u64)
    }
}

#[async_trait]
impl UserRepository for InMemoryProjectStore {
    async fn list(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn find_by_employee_id(&self, employee_id: &str) -> RepositoryResult<Option<User>> {
        let state = self.read()?;
        Ok(state
            .users
            .values()
            .find(|user| user.employee_id().eq_ignore_ascii_case(employee_id))
            .cloned())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<User>> {
        let state = self.read()?;
        Ok(state
            .users
            .values()
            .filter(|user| user.project_id() == Some(project_id))
            .cloned()
            .collect())
    }

    async fn insert(
        &self,
        fields: &UserFields,
        timestamp: DateTime<Utc>,
    ) -> RepositoryResult<User> {
        let mut state = self.write()?;
        state.check_user_references(fields, None)?;

        state.last_user_id += 1;
        let user = User::new(UserId::new(state.last_user_id), fields.clone(), timestamp);
        state.users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> RepositoryResult<()> {
        let mut state = self.write()?;
        if !state.users.contains_key(&user.id()) {
            return Err(not_found("user", user.id().value()));
        }
        state.check_user_references(user.fields(), Some(user.id()))?;
        let stored = User::new(user.id(), user.fields().clone(), user.timestamp());
        state.users.insert(user.id(), stored);
        Ok(())
    }

    async fn delete(&self, id: UserId) -> RepositoryResult<()> {
        let mut state = self.write()?;
        if state.users.remove(&id).is_none() {
            return Err(not_found("user", id.value()));
        }
        state
            .projects
            .values_mut()
            .filter(|project| project.manager_id() == Some(id))
            .for_each(Project::clear_manager);
        state
            .tasks
            .values_mut()
            .filter(|task| task.user_id() == Some(id))
            .for_each(Task::clear_user);
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.read()?.users.len() as u64)
    }
}
