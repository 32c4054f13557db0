//! Service layer for users and their relations.

use super::Repositories;
use crate::common::{ProjectId, ServiceError, ServiceResult, UserId};
use crate::project_manager::domain::{Project, Task, User, UserFields, UserPayload};
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

const ENTITY: &str = "user";

/// User CRUD and navigation service.
#[derive(Clone)]
pub struct UserService {
    repositories: Repositories,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(repositories: Repositories, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            repositories,
            clock,
        }
    }

    /// Returns every user, or only the one holding `employee_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, employee_id: Option<&str>) -> ServiceResult<Vec<User>> {
        if let Some(employee_id) = employee_id {
            let found = self.repositories.users.find_by_employee_id(employee_id).await?;
            return match found {
                Some(user) => Ok(vec![self.with_managed_project(user).await?]),
                None => Ok(Vec::new()),
            };
        }

        let users = self.repositories.users.list().await?;
        let managed: BTreeMap<UserId, ProjectId> = self
            .repositories
            .projects
            .list()
            .await?
            .iter()
            .filter_map(|project| project.manager_id().map(|manager| (manager, project.id())))
            .collect();
        Ok(users
            .into_iter()
            .map(|user| {
                let project_id = managed.get(&user.id()).copied();
                user.with_managed_project(project_id)
            })
            .collect())
    }

    /// Returns one user.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the user does not exist.
    pub async fn get(&self, id: UserId) -> ServiceResult<User> {
        let user = self.find(id).await?;
        self.with_managed_project(user).await
    }

    async fn find(&self, id: UserId) -> ServiceResult<User> {
        self.repositories
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id.value()))
    }

    async fn with_managed_project(&self, user: User) -> ServiceResult<User> {
        let managed = self.repositories.projects.find_by_manager(user.id()).await?;
        Ok(user.with_managed_project(managed.map(|project| project.id())))
    }

    /// Returns the tasks assigned to a user.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the user does not exist.
    pub async fn tasks(&self, id: UserId) -> ServiceResult<Vec<Task>> {
        let user = self.find(id).await?;
        Ok(self.repositories.tasks.list_by_user(user.id()).await?)
    }

    /// Returns the project the user is a member of, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the user does not exist.
    pub async fn project(&self, id: UserId) -> ServiceResult<Option<Project>> {
        let user = self.find(id).await?;
        match user.project_id() {
            Some(project_id) => Ok(self.repositories.projects.find_by_id(project_id).await?),
            None => Ok(None),
        }
    }

    /// Returns the project the user manages, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the user does not exist.
    pub async fn managed_project(&self, id: UserId) -> ServiceResult<Option<Project>> {
        let user = self.find(id).await?;
        Ok(self.repositories.projects.find_by_manager(user.id()).await?)
    }

    /// Validates and inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for an invalid payload and
    /// [`ServiceError::Repository`] when the employee id is taken or the
    /// project does not resolve.
    pub async fn create(&self, payload: UserPayload) -> ServiceResult<User> {
        let fields = UserFields::try_from(payload)?;
        let user = self
            .repositories
            .users
            .insert(&fields, self.clock.utc())
            .await?;
        info!(user_id = %user.id(), employee_id = user.employee_id(), "user created");
        Ok(user)
    }

    /// Validates a payload and overwrites every editable column of a user.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for an invalid payload and
    /// [`ServiceError::NotFound`] when the user does not exist.
    pub async fn update(&self, id: UserId, payload: UserPayload) -> ServiceResult<User> {
        let fields = UserFields::try_from(payload)?;
        let mut user = self.find(id).await?;
        user.update_with(fields, self.clock.utc());
        self.repositories.users.update(&user).await?;
        info!(user_id = %id, "user updated");
        self.with_managed_project(user).await
    }

    /// Deletes a user, detaching its tasks and managed project.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when the user does not exist.
    pub async fn delete(&self, id: UserId) -> ServiceResult<()> {
        let user = self.find(id).await?;
        self.repositories.users.delete(user.id()).await?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}
