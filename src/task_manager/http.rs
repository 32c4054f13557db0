//! Axum handlers for `/Tasks`.

use crate::api::{ApiError, EntityId, Payload, created};
use crate::task_manager::{
    domain::{Task, TaskPayload},
    services::TaskService,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

/// Builds the `/Tasks` routes over the given service.
pub fn router(service: TaskService) -> Router {
    Router::new()
        .route("/Tasks", get(list_tasks).post(create_task))
        .route(
            "/Tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(service)
}

async fn list_tasks(State(service): State<TaskService>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(service.list().await?))
}

async fn get_task(
    State(service): State<TaskService>,
    id: EntityId,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(service.get(id.into_id()).await?))
}

async fn create_task(
    State(service): State<TaskService>,
    Payload(payload): Payload<TaskPayload>,
) -> Result<Response, ApiError> {
    let task = service.create(payload).await?;
    Ok(created(format!("/Tasks/{}", task.id()), task))
}

async fn update_task(
    State(service): State<TaskService>,
    id: EntityId,
    Payload(payload): Payload<TaskPayload>,
) -> Result<Response, ApiError> {
    let task = service.update(id.into_id(), payload).await?;
    Ok(created(format!("/Tasks/{}", task.id()), task))
}

async fn delete_task(
    State(service): State<TaskService>,
    id: EntityId,
) -> Result<StatusCode, ApiError> {
    service.delete(id.into_id()).await?;
    Ok(StatusCode::NO_CONTENT)
}
