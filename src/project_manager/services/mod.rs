//! Application services for projects, tasks and users.

mod projects;
mod tasks;
mod users;

pub use projects::ProjectService;
pub use tasks::TaskService;
pub use users::UserService;

use crate::project_manager::ports::{ProjectRepository, TaskRepository, UserRepository};
use mockable::Clock;
use std::sync::Arc;

/// Repository handles shared by the Project Manager services.
#[derive(Clone)]
pub struct Repositories {
    /// Task persistence.
    pub tasks: Arc<dyn TaskRepository>,
    /// Project persistence.
    pub projects: Arc<dyn ProjectRepository>,
    /// User persistence.
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// Uses one store for every port.
    #[must_use]
    pub fn from_store<S>(store: S) -> Self
    where
        S: TaskRepository + ProjectRepository + UserRepository + 'static,
    {
        let store = Arc::new(store);
        Self {
            tasks: store.clone(),
            projects: store.clone(),
            users: store,
        }
    }
}

/// The three entity services over one set of repositories.
#[derive(Clone)]
pub struct Services {
    /// `/Tasks` operations.
    pub tasks: TaskService,
    /// `/Projects` operations.
    pub projects: ProjectService,
    /// `/Users` operations.
    pub users: UserService,
}

impl Services {
    /// Builds every service over the same repositories and clock.
    #[must_use]
    pub fn new(repositories: &Repositories, clock: &Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            tasks: TaskService::new(repositories.clone(), Arc::clone(clock)),
            projects: ProjectService::new(repositories.clone(), Arc::clone(clock)),
            users: UserService::new(repositories.clone(), Arc::clone(clock)),
        }
    }
}
