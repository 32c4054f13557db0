//! `/Users` handlers, including relation navigation.

use crate::api::{ApiError, EntityId, Payload, created, optional};
use crate::project_manager::{
    domain::{Task, User, UserPayload},
    services::UserService,
};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

pub(super) fn router(service: UserService) -> Router {
    Router::new()
        .route("/Users", get(list_users).post(create_user))
        .route(
            "/Users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/Users/{id}/Tasks", get(user_tasks))
        .route("/Users/{id}/Project", get(user_project))
        .route("/Users/{id}/ManagedProject", get(user_managed_project))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserFilter {
    employee_id: Option<String>,
}

async fn list_users(
    State(service): State<UserService>,
    Query(filter): Query<UserFilter>,
) -> Result<Json<Vec<User>>, ApiError> {
    let employee_id = filter.employee_id.as_deref().filter(|id| !id.is_empty());
    Ok(Json(service.list(employee_id).await?))
}

async fn get_user(
    State(service): State<UserService>,
    id: EntityId,
) -> Result<Json<User>, ApiError> {
    Ok(Json(service.get(id.into_id()).await?))
}

async fn user_tasks(
    State(service): State<UserService>,
    id: EntityId,
) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(service.tasks(id.into_id()).await?))
}

async fn user_project(
    State(service): State<UserService>,
    id: EntityId,
) -> Result<Response, ApiError> {
    Ok(optional(service.project(id.into_id()).await?))
}

async fn user_managed_project(
    State(service): State<UserService>,
    id: EntityId,
) -> Result<Response, ApiError> {
    Ok(optional(service.managed_project(id.into_id()).await?))
}

async fn create_user(
    State(service): State<UserService>,
    Payload(payload): Payload<UserPayload>,
) -> Result<Response, ApiError> {
    let user = service.create(payload).await?;
    Ok(created(format!("/Users/{}", user.id()), user))
}

async fn update_user(
    State(service): State<UserService>,
    id: EntityId,
    Payload(payload): Payload<UserPayload>,
) -> Result<Response, ApiError> {
    let user = service.update(id.into_id(), payload).await?;
    Ok(created(format!("/Users/{}", user.id()), user))
}

async fn delete_user(
    State(service): State<UserService>,
    id: EntityId,
) -> Result<StatusCode, ApiError> {
    service.delete(id.into_id()).await?;
    Ok(StatusCode::NO_CONTENT)
}
