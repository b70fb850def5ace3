use sea_orm::{ActiveModelTrait, ActiveValue};
use task_tracker_server::db::DbManager;
use task_tracker_server::entities::projects;
use task_tracker_server::task::Task;
use tempfile::TempDir;

/// Test context backed by a throwaway SQLite file.
pub struct TestContext {
    #[allow(dead_code)] // directory is kept to ensure the database file is not removed
    pub dir: TempDir,
    pub db: DbManager,
}

/// Creates an empty store in a temporary directory without initializing it.
#[allow(dead_code)]
pub fn setup_store() -> anyhow::Result<TestContext> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();
    let dir = tempfile::tempdir()?;
    let db_url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("tasks.db").display()
    );
    Ok(TestContext {
        db: DbManager::new(db_url),
        dir,
    })
}

/// Creates a store and runs the schema initializer on it.
pub async fn setup() -> anyhow::Result<TestContext> {
    let context = setup_store()?;
    context.db.initialize_schema().await?;
    Ok(context)
}

/// Inserts a project row directly, the way only the initializer does in
/// production, and returns its id.
#[allow(dead_code)]
pub async fn insert_project(db: &DbManager, name: &str) -> anyhow::Result<i32> {
    let conn = db.connect().await?;
    let project = projects::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        status: ActiveValue::Set(Some("Active".to_string())),
        ..Default::default()
    }
    .insert(&conn)
    .await?;
    conn.close().await?;
    Ok(project.id)
}

/// Builds a task in the default project with the given due date and status.
#[allow(dead_code)]
pub fn task(title: &str, due_date: &str, status: &str) -> Task {
    Task::new(
        title.to_string(),
        None,
        Some(due_date.to_string()),
        Some("Medium".to_string()),
        0,
    )
    .with_status(Some(status.to_string()))
}
