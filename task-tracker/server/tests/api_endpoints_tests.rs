use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use task_tracker_server::task::{STATUS_DONE, STATUS_PENDING};
use task_tracker_server::web::create_router;
use tower::ServiceExt;

mod common;

use common::{TestContext, setup, task};

/// Sends `request` through a fresh router and parses the JSON body.
async fn send_json(state: &TestContext, request: Request<Body>) -> (StatusCode, Value) {
    let app = create_router(state.db.clone());
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn can_list_projects_as_json() {
    let state = setup().await.expect("Failed to setup test context");

    let (status, body) = send_json(&state, get("/api/v1/projects")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["projects"][0]["id"], 0);
    assert_eq!(body["projects"][0]["name"], "General Tasks");
    assert_eq!(body["projects"][0]["status"], "Active");
}

#[tokio::test]
async fn can_list_tasks_filtered_by_status() {
    let state = setup().await.expect("Failed to setup test context");
    for (title, due_date, status) in [
        ("Later", "2025-12-24", STATUS_PENDING),
        ("Finished", "2025-01-01", STATUS_DONE),
        ("Sooner", "2025-03-15", STATUS_PENDING),
    ] {
        state
            .db
            .create_task(task(title, due_date, status))
            .await
            .expect("Failed to create task");
    }

    let (status, body) = send_json(&state, get("/api/v1/tasks?status=Pending")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["tasks"][0]["title"], "Sooner");
    assert_eq!(body["tasks"][1]["title"], "Later");
}

#[tokio::test]
async fn can_list_all_tasks_without_filter() {
    let state = setup().await.expect("Failed to setup test context");
    state
        .db
        .create_task(task("Finished", "2025-01-01", STATUS_DONE))
        .await
        .expect("Failed to create task");

    let (status, body) = send_json(&state, get("/api/v1/tasks")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["tasks"][0]["status"], "Done");
}

#[tokio::test]
async fn can_create_task_as_json() {
    let state = setup().await.expect("Failed to setup test context");

    let (status, body) = send_json(
        &state,
        post_json(
            "/api/v1/tasks",
            &json!({
                "title": "Renew passport",
                "due_date": "2025-09-01",
                "priority": "High"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["project_id"], 0);

    let tasks = state.db.list_tasks(None).await.expect("Failed to list tasks");
    assert_eq!(tasks.len(), 1);
    assert_eq!(Some(tasks[0].id.unwrap() as i64), body["id"].as_i64());
}

#[tokio::test]
async fn reports_storage_errors_as_json() {
    let state = setup().await.expect("Failed to setup test context");

    let (status, body) = send_json(
        &state,
        post_json("/api/v1/tasks", &json!({ "title": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to create task");
}

#[tokio::test]
async fn rejects_non_numeric_project_id_in_json() {
    let state = setup().await.expect("Failed to setup test context");

    let (status, _) = send_json(
        &state,
        post_json(
            "/api/v1/tasks",
            &json!({ "title": "Broken", "project_id": "abc" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn can_serve_openapi_document() {
    let state = setup().await.expect("Failed to setup test context");

    let (status, body) = send_json(&state, get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/tasks"]["get"].is_object());
    assert!(body["paths"]["/api/v1/tasks"]["post"].is_object());
    assert!(body["paths"]["/api/v1/projects"]["get"].is_object());
}
