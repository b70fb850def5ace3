pub mod v1;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::web::TrackerState;

/// OpenAPI description of the JSON API.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::task::api::v1::get_tasks_handler,
        crate::task::api::v1::create_task_handler,
        crate::project::api::v1::get_projects_handler,
    ),
    components(schemas(
        crate::task::api::v1::TaskJson,
        crate::task::api::v1::TasksResponse,
        crate::task::api::v1::CreateTaskRequest,
        crate::project::api::v1::ProjectJson,
        crate::project::api::v1::ProjectsResponse,
        v1::ServerErrorResponse,
    )),
    tags(
        (name = "Tasks", description = "Create and list tasks"),
        (name = "Projects", description = "List projects"),
    )
)]
pub struct ApiDoc;

/// Handler for GET /api-docs/openapi.json.
#[tracing::instrument]
async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Creates the API routes for JSON API endpoints.
pub fn create_api_router(state: Arc<TrackerState>) -> Router {
    let tasks_router = crate::task::api::v1::create_api_router(state.clone());
    let projects_router = crate::project::api::v1::create_api_router(state);
    Router::new()
        .nest("/api/v1", tasks_router.merge(projects_router))
        .route("/api-docs/openapi.json", get(openapi_handler))
}
