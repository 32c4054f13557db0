//! Axum handlers for `/Tasks`, `/Projects` and `/Users`.

mod projects;
mod tasks;
mod users;

use crate::project_manager::services::Services;
use axum::Router;

/// Builds every Project Manager route over the given services.
pub fn router(services: Services) -> Router {
    Router::new()
        .merge(tasks::router(services.tasks))
        .merge(projects::router(services.projects))
        .merge(users::router(services.users))
}
