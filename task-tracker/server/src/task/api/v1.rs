use crate::project::DEFAULT_PROJECT_ID;
use crate::task::{Task, non_empty};
use crate::web::TrackerState;
use crate::web::api::v1::ServerErrorResponse;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// JSON representation of a Task for API responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskJson {
    /// Identifier assigned by storage
    id: Option<i32>,
    /// Title of the task
    title: String,
    /// Optional free text description
    description: Option<String>,
    /// Creation date, YYYY-MM-DD for tasks created through this service
    created_at: Option<String>,
    /// Due date, compared as plain text when sorting
    due_date: Option<String>,
    /// Priority, e.g. "High", "Medium" or "Low"
    priority: Option<String>,
    /// Status, e.g. "Pending" or "Done"
    status: Option<String>,
    /// Project the task belongs to
    project_id: Option<i32>,
}

impl From<Task> for TaskJson {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            created_at: task.created_at,
            due_date: task.due_date,
            priority: task.priority,
            status: task.status,
            project_id: task.project_id,
        }
    }
}

/// API response for listing tasks.
#[derive(Debug, Serialize, ToSchema)]
pub struct TasksResponse {
    /// Tasks ordered by due date
    tasks: Vec<TaskJson>,
    /// Total number of tasks
    count: usize,
}

/// Query parameters for filtering tasks by status.
#[derive(Debug, Deserialize)]
pub struct TasksQuery {
    /// Optional exact status to filter tasks by
    #[serde(default)]
    status: Option<String>,
}

/// JSON request payload for creating a task.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    /// Title of the task, must not be empty
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    /// Defaults to "Pending"
    #[serde(default)]
    status: Option<String>,
    /// Defaults to the default project
    #[serde(default)]
    project_id: Option<i32>,
}

impl From<CreateTaskRequest> for Task {
    fn from(request: CreateTaskRequest) -> Self {
        let task = Task::new(
            request.title,
            non_empty(request.description),
            non_empty(request.due_date),
            non_empty(request.priority),
            request.project_id.unwrap_or(DEFAULT_PROJECT_ID),
        );
        match non_empty(request.status) {
            Some(status) => task.with_status(Some(status)),
            None => task,
        }
    }
}

/// Handler for GET /api/v1/tasks - Returns tasks ordered by due date.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    params(
        ("status" = Option<String>, Query, description = "Optional exact status to filter tasks by")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = TasksResponse),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn get_tasks_handler(
    State(state): State<Arc<TrackerState>>,
    Query(query): Query<TasksQuery>,
) -> Result<Json<TasksResponse>, (StatusCode, Json<ServerErrorResponse>)> {
    match state.db.list_tasks(query.status.as_deref()).await {
        Ok(tasks) => {
            let tasks: Vec<TaskJson> = tasks.into_iter().map(TaskJson::from).collect();
            let count = tasks.len();
            Ok(Json(TasksResponse { tasks, count }))
        }
        Err(err) => {
            tracing::error!("Failed to get tasks: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerErrorResponse::new(
                    "Failed to retrieve tasks".to_string(),
                )),
            ))
        }
    }
}

/// Handler for POST /api/v1/tasks - Creates a task and returns it with its id.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskJson),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn create_task_handler(
    State(state): State<Arc<TrackerState>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskJson>), (StatusCode, Json<ServerErrorResponse>)> {
    match state.db.create_task(Task::from(request)).await {
        Ok(task) => Ok((StatusCode::CREATED, Json(TaskJson::from(task)))),
        Err(err) => {
            tracing::error!("Failed to create task: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerErrorResponse::new("Failed to create task".to_string())),
            ))
        }
    }
}

/// Creates and returns the tasks API router.
pub fn create_api_router(state: Arc<TrackerState>) -> Router {
    Router::new()
        .route("/tasks", get(get_tasks_handler).post(create_task_handler))
        .with_state(state)
}
