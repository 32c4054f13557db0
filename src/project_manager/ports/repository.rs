//! Repository ports for the Project Manager entities.
//!
//! Every mutating method is a single atomic commit. Foreign-key and
//! uniqueness violations are reported as
//! [`RepositoryError::ForeignKey`](crate::persistence::RepositoryError::ForeignKey)
//! and [`RepositoryError::Duplicate`](crate::persistence::RepositoryError::Duplicate).

use crate::common::{ProjectId, TaskId, UserId};
use crate::persistence::RepositoryResult;
use crate::project_manager::domain::{
    Project, ProjectFields, Task, TaskFields, User, UserFields,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Project task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task ordered by identifier.
    async fn list(&self) -> RepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Returns the tasks belonging to a project.
    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>>;

    /// Returns the tasks assigned to a user.
    async fn list_by_user(&self, user_id: UserId) -> RepositoryResult<Vec<Task>>;

    /// Inserts a new task and returns it with its generated identifier.
    async fn insert(&self, fields: &TaskFields, timestamp: DateTime<Utc>)
    -> RepositoryResult<Task>;

    /// Overwrites an existing task.
    async fn update(&self, task: &Task) -> RepositoryResult<()>;

    /// Deletes a task, detaching its sub-tasks.
    async fn delete(&self, id: TaskId) -> RepositoryResult<()>;

    /// Returns the number of stored tasks.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Project persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns every project ordered by identifier, without tasks.
    async fn list(&self) -> RepositoryResult<Vec<Project>>;

    /// Finds a project by identifier.
    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;

    /// Finds the project managed by a user.
    async fn find_by_manager(&self, manager_id: UserId) -> RepositoryResult<Option<Project>>;

    /// Inserts a new project and returns it with its generated identifier.
    async fn insert(
        &self,
        fields: &ProjectFields,
        timestamp: DateTime<Utc>,
    ) -> RepositoryResult<Project>;

    /// Overwrites an existing project.
    async fn update(&self, project: &Project) -> RepositoryResult<()>;

    /// Deletes a project together with its tasks and detaches its members.
    async fn delete(&self, id: ProjectId) -> RepositoryResult<()>;

    /// Returns the number of stored projects.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// User persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every user ordered by identifier.
    async fn list(&self) -> RepositoryResult<Vec<User>>;

    /// Finds a user by identifier.
    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>>;

    /// Finds a user by employee number, ignoring ASCII case.
    async fn find_by_employee_id(&self, employee_id: &str) -> RepositoryResult<Option<User>>;

    /// Returns the members of a project.
    async fn list_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<User>>;

    /// Inserts a new user and returns it with its generated identifier.
    async fn insert(&self, fields: &UserFields, timestamp: DateTime<Utc>)
    -> RepositoryResult<User>;

    /// Overwrites an existing user.
    async fn update(&self, user: &User) -> RepositoryResult<()>;

    /// Deletes a user, detaching its tasks and managed project.
    async fn delete(&self, id: UserId) -> RepositoryResult<()>;

    /// Returns the number of stored users.
    async fn count(&self) -> RepositoryResult<u64>;
}
