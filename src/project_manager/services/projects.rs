//! Service layer for projects and their relations.

use super::Repositories;
use crate::common::{ProjectId, ServiceError, ServiceResult};
use crate::project_manager::domain::{Project, ProjectFields, ProjectPayload, Task, User};
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

const ENTITY: &str = "project";

/// Project CRUD and navigation service.
#[derive(Clone)]
pub struct ProjectService {
    repositories: Repositories,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl ProjectService {
    /// Creates a new project service.
    #[must_use]
    pub fn new(repositories: Repositories, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            repositories,
            clock,
        }
    }

    /// Returns every project with its tasks attached.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when a lookup fails.
    pub async fn list(&self) -> ServiceResult<Vec<Project>> {
        let projects = self.repositories.projects.list().await?;
        let mut tasks_by_project: BTreeMap<ProjectId, Vec<Task>> = BTreeMap::new();
        for task in self.repositories.tasks.list().await? {
            tasks_by_project
                .entry(task.project_id())
                .or_default()
                .push(task);
        }
        Ok(projects
            .into_iter()
            .map(|project| {
                let tasks = tasks_by_project.remove(&project.id()).unwrap_or_default();
                project.with_tasks(tasks)
            })
            .collect())
    }

    /// Returns one project without its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the project does not exist.
    pub async fn get(&self, id: ProjectId) -> ServiceResult<Project> {
        self.repositories
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id.value()))
    }

    /// Returns the tasks of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the project does not exist.
    pub async fn tasks(&self, id: ProjectId) -> ServiceResult<Vec<Task>> {
        let project = self.get(id).await?;
        Ok(self.repositories.tasks.list_by_project(project.id()).await?)
    }

    /// Returns the member users of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the project does not exist.
    pub async fn members(&self, id: ProjectId) -> ServiceResult<Vec<User>> {
        let project = self.get(id).await?;
        Ok(self.repositories.users.list_by_project(project.id()).await?)
    }

    /// Returns the managing user of a project, if one is assigned.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the project does not exist.
    pub async fn manager(&self, id: ProjectId) -> ServiceResult<Option<User>> {
        let project = self.get(id).await?;
        match project.manager_id() {
            Some(manager_id) => Ok(self
                .repositories
                .users
                .find_by_id(manager_id)
                .await?
                .map(|user| user.with_managed_project(Some(project.id())))),
            None => Ok(None),
        }
    }

    /// Validates and inserts a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for an invalid payload and
    /// [`ServiceError::Repository`] when the manager does not resolve or
    /// already manages another project.
    pub async fn create(&self, payload: ProjectPayload) -> ServiceResult<Project> {
        let fields = ProjectFields::try_from(payload)?;
        let project = self
            .repositories
            .projects
            .insert(&fields, self.clock.utc())
            .await?;
        info!(project_id = %project.id(), "project created");
        Ok(project)
    }

    /// Validates a payload and overwrites every editable column of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for an invalid payload and
    /// [`ServiceError::NotFound`] when the project does not exist.
    pub async fn update(&self, id: ProjectId, payload: ProjectPayload) -> ServiceResult<Project> {
        let fields = ProjectFields::try_from(payload)?;
        let mut project = self.get(id).await?;
        project.update_with(fields, self.clock.utc());
        self.repositories.projects.update(&project).await?;
        info!(project_id = %id, "project updated");
        Ok(project)
    }

    /// Deletes a project, its tasks and its memberships.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the project does not exist.
    pub async fn delete(&self, id: ProjectId) -> ServiceResult<()> {
        let project = self.get(id).await?;
        self.repositories.projects.delete(project.id()).await?;
        info!(project_id = %id, "project deleted");
        Ok(())
    }
}
