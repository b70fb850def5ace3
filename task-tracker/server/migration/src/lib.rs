pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_projects_and_tasks;

pub use m20250901_000001_create_projects_and_tasks::{
    DEFAULT_PROJECT_DESCRIPTION, DEFAULT_PROJECT_ID, DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_STATUS,
};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20250901_000001_create_projects_and_tasks::Migration,
        )]
    }
}
