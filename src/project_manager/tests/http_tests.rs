//! Handler tests driving the Project Manager router.

use std::sync::Arc;

use super::memory_repositories;
use crate::api::ErrorEnvelope;
use crate::project_manager::{http::router, seed::seed, services::Services};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;

#[fixture]
async fn app() -> Router {
    let (_, repositories) = memory_repositories();
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(DefaultClock);
    seed(&repositories, clock.as_ref())
        .await
        .expect("seed should succeed");
    router(Services::new(&repositories, &clock))
}

fn request(method: &str, uri: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let built = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    };
    built.expect("valid request")
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("request should complete")
}

async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn projects_get_all_embeds_tasks(#[future] app: Router) {
    let app = app.await;

    let response = send(&app, request("GET", "/Projects", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["summary"], json!("The Machine"));
    assert_eq!(body[0]["tasks"].as_array().map(Vec::len), Some(12));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_get_by_id_omits_tasks(#[future] app: Router) {
    let app = app.await;

    let body = body_json(send(&app, request("GET", "/Projects/1", None)).await).await;

    assert_eq!(body["projectId"], json!(1));
    assert_eq!(body["managerId"], json!(14));
    assert!(body.get("tasks").is_none());
}

#[rstest]
#[case::tasks("/Projects/1/Tasks", 12)]
#[case::members("/Projects/1/Members", 14)]
#[case::user_tasks("/Users/1/Tasks", 1)]
#[case::manager_tasks("/Users/14/Tasks", 0)]
#[tokio::test(flavor = "multi_thread")]
async fn relation_collections_are_listed(
    #[future] app: Router,
    #[case] uri: &str,
    #[case] expected: usize,
) {
    let app = app.await;

    let response = send(&app, request("GET", uri, None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().map(Vec::len), Some(expected));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_manager_endpoint_returns_user(#[future] app: Router) {
    let app = app.await;

    let body = body_json(send(&app, request("GET", "/Projects/1/Manager", None)).await).await;

    assert_eq!(body["employeeId"], json!("100013"));
    assert_eq!(body["fullName"], json!("Sutherland, Jeff"));
    assert_eq!(body["managedProjectId"], json!(1));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_body_names_managed_project(#[future] app: Router) {
    let app = app.await;

    let manager = body_json(send(&app, request("GET", "/Users/14", None)).await).await;
    let member = body_json(send(&app, request("GET", "/Users/1", None)).await).await;

    assert_eq!(manager["managedProjectId"], json!(1));
    assert!(member.get("managedProjectId").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn managed_project_is_no_content_for_non_managers(#[future] app: Router) {
    let app = app.await;

    let response = send(&app, request("GET", "/Users/1/ManagedProject", None)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let managed = send(&app, request("GET", "/Users/14/ManagedProject", None)).await;
    assert_eq!(managed.status(), StatusCode::OK);
}

#[rstest]
#[case::missing_user("/Users/99/Project")]
#[case::missing_project("/Projects/99/Members")]
#[case::not_numeric("/Users/abc")]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_rows_are_not_found(#[future] app: Router, #[case] uri: &str) {
    let app = app.await;

    let response = send(&app, request("GET", uri, None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_filter_by_employee_id(#[future] app: Router) {
    let app = app.await;

    let body = body_json(send(&app, request("GET", "/Users?employeeId=100004", None)).await).await;

    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["lastName"], json!("Wirth"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_employee_id_is_a_server_error(#[future] app: Router) {
    let app = app.await;
    let payload = json!({"firstName": "Alan", "lastName": "Turing", "employeeId": "100000"});

    let response = send(&app, request("POST", "/Users", Some(&payload))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let envelope: ErrorEnvelope =
        serde_json::from_value(body_json(response).await).expect("error envelope");
    assert_eq!(envelope.code, 500);
    assert!(envelope.errors.is_valid());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_is_reported_as_model_state(#[future] app: Router) {
    let app = app.await;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/Projects")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .expect("valid request"),
        )
        .await
        .expect("request should complete");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let envelope: ErrorEnvelope =
        serde_json::from_value(body_json(response).await).expect("error envelope");
    assert!(!envelope.errors.field_errors("body").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_project_removes_tasks_and_memberships(#[future] app: Router) {
    let app = app.await;

    let deleted = send(&app, request("DELETE", "/Projects/1", None)).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let tasks = body_json(send(&app, request("GET", "/Tasks", None)).await).await;
    assert_eq!(tasks.as_array().map(Vec::len), Some(0));
    let membership = send(&app, request("GET", "/Users/1/Project", None)).await;
    assert_eq!(membership.status(), StatusCode::NO_CONTENT);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_manager_clears_project_manager(#[future] app: Router) {
    let app = app.await;

    let deleted = send(&app, request("DELETE", "/Users/14", None)).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let manager = send(&app, request("GET", "/Projects/1/Manager", None)).await;
    assert_eq!(manager.status(), StatusCode::NO_CONTENT);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_put_moves_assignment(#[future] app: Router) {
    let app = app.await;
    let payload = json!({"summary": "Reassigned", "projectId": 1, "userId": 14, "status": "Suspended"});

    let response = send(&app, request("PUT", "/Tasks/4", Some(&payload))).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).map(|value| value.as_bytes()),
        Some(b"/Tasks/4".as_slice())
    );
    let body = body_json(response).await;
    assert_eq!(body["userId"], json!(14));
    assert_eq!(body["status"], json!("Suspended"));
    assert!(body.get("parentId").is_none());
}
