//! `/Projects` handlers, including relation navigation.

use crate::api::{ApiError, EntityId, Payload, created, optional};
use crate::project_manager::{
    domain::{Project, ProjectPayload, Task, User},
    services::ProjectService,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

pub(super) fn router(service: ProjectService) -> Router {
    Router::new()
        .route("/Projects", get(list_projects).post(create_project))
        .route(
            "/Projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/Projects/{id}/Tasks", get(project_tasks))
        .route("/Projects/{id}/Members", get(project_members))
        .route("/Projects/{id}/Manager", get(project_manager))
        .with_state(service)
}

async fn list_projects(
    State(service): State<ProjectService>,
) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(service.list().await?))
}

async fn get_project(
    State(service): State<ProjectService>,
    id: EntityId,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(service.get(id.into_id()).await?))
}

async fn project_tasks(
    State(service): State<ProjectService>,
    id: EntityId,
) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(service.tasks(id.into_id()).await?))
}

async fn project_members(
    State(service): State<ProjectService>,
    id: EntityId,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(service.members(id.into_id()).await?))
}

async fn project_manager(
    State(service): State<ProjectService>,
    id: EntityId,
) -> Result<Response, ApiError> {
    Ok(optional(service.manager(id.into_id()).await?))
}

async fn create_project(
    State(service): State<ProjectService>,
    Payload(payload): Payload<ProjectPayload>,
) -> Result<Response, ApiError> {
    let project = service.create(payload).await?;
    Ok(created(format!("/Projects/{}", project.id()), project))
}

async fn update_project(
    State(service): State<ProjectService>,
    id: EntityId,
    Payload(payload): Payload<ProjectPayload>,
) -> Result<Response, ApiError> {
    let project = service.update(id.into_id(), payload).await?;
    Ok(created(format!("/Projects/{}", project.id()), project))
}

async fn delete_project(
    State(service): State<ProjectService>,
    id: EntityId,
) -> Result<StatusCode, ApiError> {
    service.delete(id.into_id()).await?;
    Ok(StatusCode::NO_CONTENT)
}
