use crate::entities::tasks;
use sea_orm::ActiveValue;

pub mod api;
pub mod web;

/// Status given to every task created without an explicit one.
pub const STATUS_PENDING: &str = "Pending";
/// Conventional status of a finished task. Statuses are free text; this is
/// only the vocabulary the pages and API clients share with `STATUS_PENDING`.
pub const STATUS_DONE: &str = "Done";

/// A unit of work belonging to a project.
///
/// `id` is `None` until the task has been persisted. Every other text field is
/// free text and is stored exactly as given.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Task {
    pub id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub project_id: Option<i32>,
}

impl Task {
    /// Builds a not-yet-persisted task created today with the `Pending` status.
    pub fn new(
        title: String,
        description: Option<String>,
        due_date: Option<String>,
        priority: Option<String>,
        project_id: i32,
    ) -> Self {
        Self {
            id: None,
            title,
            description,
            created_at: Some(today()),
            due_date,
            priority,
            status: Some(STATUS_PENDING.to_string()),
            project_id: Some(project_id),
        }
    }

    /// Replaces the status, e.g. to create a task that is already done.
    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = status;
        self
    }
}

/// Today's local date as `YYYY-MM-DD`.
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Treats a blank form or JSON field as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl From<tasks::Model> for Task {
    fn from(model: tasks::Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            description: model.description,
            created_at: model.created_at,
            due_date: model.due_date,
            priority: model.priority,
            status: model.status,
            project_id: model.project_id,
        }
    }
}

impl From<&Task> for tasks::ActiveModel {
    fn from(task: &Task) -> Self {
        tasks::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(task.title.clone()),
            description: ActiveValue::Set(task.description.clone()),
            created_at: ActiveValue::Set(task.created_at.clone()),
            due_date: ActiveValue::Set(task.due_date.clone()),
            priority: ActiveValue::Set(task.priority.clone()),
            status: ActiveValue::Set(task.status.clone()),
            project_id: ActiveValue::Set(task.project_id),
        }
    }
}
