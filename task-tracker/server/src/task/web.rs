use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    response::{Html, Redirect},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::project::Project;
use crate::task::{STATUS_PENDING, Task, non_empty};
use crate::web::{TrackerState, WebError};

/// Fields posted by the task creation form.
///
/// `project_id` must be an integer; anything else is rejected by the form
/// extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct CreateTaskForm {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    project_id: i32,
}

impl From<CreateTaskForm> for Task {
    fn from(form: CreateTaskForm) -> Self {
        Task::new(
            form.title,
            non_empty(form.description),
            non_empty(form.due_date),
            non_empty(form.priority),
            form.project_id,
        )
    }
}

/// A task as shown on the index page, next to the name of its project.
struct TaskRow {
    task: Task,
    project_name: String,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    rows: Vec<TaskRow>,
    projects: Vec<Project>,
}

impl IndexTemplate {
    pub fn new(tasks: Vec<Task>, projects: Vec<Project>) -> Self {
        let rows = tasks
            .into_iter()
            .map(|task| TaskRow {
                project_name: project_name(&projects, task.project_id).to_string(),
                task,
            })
            .collect();
        Self { rows, projects }
    }
}

/// Name of the project with `project_id`, or an empty string when the project
/// is unknown.
fn project_name(projects: &[Project], project_id: Option<i32>) -> &str {
    project_id
        .and_then(|id| projects.iter().find(|project| project.id == id))
        .map(|project| project.name.as_str())
        .unwrap_or("")
}

#[derive(Template)]
#[template(path = "tasks/create_form.html")]
struct CreateTaskFormTemplate {
    projects: Vec<Project>,
}

impl CreateTaskFormTemplate {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

/// Handler for GET / that lists pending tasks and the known projects.
#[tracing::instrument(skip(state))]
async fn index_handler(State(state): State<Arc<TrackerState>>) -> Result<Html<String>, WebError> {
    let tasks = state.db.list_tasks(Some(STATUS_PENDING)).await?;
    let projects = state.db.list_projects().await?;
    let template = IndexTemplate::new(tasks, projects);
    template.render().map(Html).map_err(WebError::from)
}

/// Handler for GET /create that displays the task creation form.
#[tracing::instrument(skip(state))]
async fn create_task_form_handler(
    State(state): State<Arc<TrackerState>>,
) -> Result<Html<String>, WebError> {
    let projects = state.db.list_projects().await?;
    let template = CreateTaskFormTemplate::new(projects);
    template.render().map(Html).map_err(WebError::from)
}

/// Handler for POST /create that stores the task and goes back to the list.
#[tracing::instrument(skip(state))]
async fn create_task_handler(
    State(state): State<Arc<TrackerState>>,
    Form(form): Form<CreateTaskForm>,
) -> Result<Redirect, WebError> {
    state.db.create_task(Task::from(form)).await?;
    Ok(Redirect::to("/"))
}

/// Creates and returns the router for the HTML pages.
pub fn create_task_router(state: Arc<TrackerState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(
            "/create",
            get(create_task_form_handler).post(create_task_handler),
        )
        .with_state(state)
}
