use crate::project::Project;
use crate::web::TrackerState;
use crate::web::api::v1::ServerErrorResponse;
use axum::{Router, extract::State, http::StatusCode, response::Json, routing::get};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// JSON representation of a Project for API responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectJson {
    /// Unique identifier of the project; 0 is the default project
    id: i32,
    /// Name of the project
    name: String,
    /// Optional free text description
    description: Option<String>,
    /// Optional start date, free text
    start_date: Option<String>,
    /// Optional status, e.g. "Active"
    status: Option<String>,
}

impl From<Project> for ProjectJson {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            start_date: project.start_date,
            status: project.status,
        }
    }
}

/// API response for listing all projects.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectsResponse {
    /// List of projects
    projects: Vec<ProjectJson>,
    /// Total number of projects
    count: usize,
}

/// Handler for GET /api/v1/projects - Returns all projects in JSON format.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    responses(
        (status = 200, description = "Successfully retrieved projects", body = ProjectsResponse),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn get_projects_handler(
    State(state): State<Arc<TrackerState>>,
) -> Result<Json<ProjectsResponse>, (StatusCode, Json<ServerErrorResponse>)> {
    match state.db.list_projects().await {
        Ok(projects) => {
            let projects: Vec<ProjectJson> = projects.into_iter().map(ProjectJson::from).collect();
            let count = projects.len();
            Ok(Json(ProjectsResponse { projects, count }))
        }
        Err(err) => {
            tracing::error!("Failed to get projects: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerErrorResponse::new(
                    "Failed to retrieve projects".to_string(),
                )),
            ))
        }
    }
}

/// Creates and returns the projects API router.
pub fn create_api_router(state: Arc<TrackerState>) -> Router {
    Router::new()
        .route("/projects", get(get_projects_handler))
        .with_state(state)
}
