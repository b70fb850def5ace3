use crate::config::Config;
use crate::entities::{projects, tasks};
use crate::project::Project;
use crate::task::Task;
use migration::MigratorTrait;
use sea_orm::*;

/// Error type for DbManager operations.
#[derive(Debug, thiserror::Error)]
pub enum DbManagerError {
    /// Represents any storage error: connection failures and constraint
    /// violations alike.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Data-access layer between task/project records and their rows.
///
/// Holds only the connection URL. Every operation opens its own connection
/// and closes it again before returning, whether or not the operation
/// succeeded.
#[derive(Debug, Clone)]
pub struct DbManager {
    db_url: String,
    sql_logging: bool,
}

impl DbManager {
    pub fn new(db_url: impl Into<String>) -> Self {
        Self {
            db_url: db_url.into(),
            sql_logging: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.db_url.clone()).with_sql_logging(config.sql_logging)
    }

    /// Enables or disables statement logging in the underlying driver.
    pub fn with_sql_logging(mut self, enabled: bool) -> Self {
        self.sql_logging = enabled;
        self
    }

    /// Opens a fresh connection to the store.
    ///
    /// The `tasks.project_id` foreign key stays declared but is not enforced:
    /// a task may name a project that does not exist.
    pub async fn connect(&self) -> Result<DatabaseConnection, DbManagerError> {
        let mut options = ConnectOptions::new(self.db_url.clone());
        options.max_connections(1).sqlx_logging(self.sql_logging);
        let db = Database::connect(options).await?;
        // Single-connection pool, so the pragma covers every statement run on `db`.
        if let Err(err) = db.execute_unprepared("PRAGMA foreign_keys = OFF").await {
            let _ = db.close().await;
            return Err(err.into());
        }
        Ok(db)
    }

    /// Creates the `projects` and `tasks` tables if they are missing and seeds
    /// the default project. Safe to run any number of times.
    #[tracing::instrument(skip(self))]
    pub async fn initialize_schema(&self) -> Result<(), DbManagerError> {
        let db = self.connect().await?;
        let applied = migration::Migrator::up(&db, None).await;
        release(db, applied).await
    }

    /// Inserts `task` and returns it with the id assigned by storage.
    ///
    /// Nothing is validated here: an empty title is rejected by the table
    /// constraint, and the project id is stored as given.
    #[tracing::instrument(skip(self))]
    pub async fn create_task(&self, mut task: Task) -> Result<Task, DbManagerError> {
        let db = self.connect().await?;
        let inserted = tasks::Entity::insert(tasks::ActiveModel::from(&task))
            .exec(&db)
            .await;
        let inserted = release(db, inserted).await?;

        task.id = Some(inserted.last_insert_id);
        tracing::info!(task_id = inserted.last_insert_id, "Created task");
        Ok(task)
    }

    /// Retrieves every project in storage order.
    #[tracing::instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<Project>, DbManagerError> {
        let db = self.connect().await?;
        let found = projects::Entity::find().all(&db).await;
        let projects = release(db, found).await?;
        Ok(projects.into_iter().map(Project::from).collect())
    }

    /// Retrieves tasks ordered by due date, as plain strings, ascending.
    ///
    /// When `status` is given and not empty only tasks whose status matches
    /// it exactly are returned.
    #[tracing::instrument(skip(self))]
    pub async fn list_tasks(&self, status: Option<&str>) -> Result<Vec<Task>, DbManagerError> {
        let mut query = tasks::Entity::find();
        if let Some(status) = status.filter(|status| !status.is_empty()) {
            query = query.filter(tasks::Column::Status.eq(status));
        }
        let query = query
            .order_by_asc(tasks::Column::DueDate)
            .order_by_asc(tasks::Column::Id);

        let db = self.connect().await?;
        let found = query.all(&db).await;
        let tasks = release(db, found).await?;
        Ok(tasks.into_iter().map(Task::from).collect())
    }
}

/// Closes `db`, then hands back the outcome of the work done on it. The
/// work's own error wins over a failure to close.
async fn release<T>(
    db: DatabaseConnection,
    outcome: Result<T, DbErr>,
) -> Result<T, DbManagerError> {
    let closed = db.close().await;
    let value = outcome?;
    closed?;
    Ok(value)
}
