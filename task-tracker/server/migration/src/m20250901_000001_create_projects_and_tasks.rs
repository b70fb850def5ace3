use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Reserved id of the project every unassigned task falls back to.
pub const DEFAULT_PROJECT_ID: i32 = 0;
pub const DEFAULT_PROJECT_NAME: &str = "General Tasks";
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "Uncategorized tasks";
pub const DEFAULT_PROJECT_STATUS: &str = "Active";

const FK_TASKS_TO_PROJECTS: &str = "fk-tasks-project_id";

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    Status,
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    Title,
    Description,
    CreatedAt,
    DueDate,
    Priority,
    Status,
    ProjectId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(text(Projects::Name))
                    .col(text_null(Projects::Description))
                    .col(text_null(Projects::StartDate))
                    .col(text_null(Projects::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(pk_auto(Tasks::Id))
                    .col(text(Tasks::Title).check(Expr::col(Tasks::Title).ne("")))
                    .col(text_null(Tasks::Description))
                    .col(text_null(Tasks::CreatedAt))
                    .col(text_null(Tasks::DueDate))
                    .col(text_null(Tasks::Priority))
                    .col(text_null(Tasks::Status))
                    .col(integer_null(Tasks::ProjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TASKS_TO_PROJECTS)
                            .from(Tasks::Table, Tasks::ProjectId)
                            .to(Projects::Table, Projects::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Insert-if-absent, so a store that already carries the row is left as is.
        let seed_default_project = Query::insert()
            .into_table(Projects::Table)
            .columns([
                Projects::Id,
                Projects::Name,
                Projects::Description,
                Projects::Status,
            ])
            .values_panic([
                DEFAULT_PROJECT_ID.into(),
                DEFAULT_PROJECT_NAME.into(),
                DEFAULT_PROJECT_DESCRIPTION.into(),
                DEFAULT_PROJECT_STATUS.into(),
            ])
            .on_conflict(OnConflict::column(Projects::Id).do_nothing().to_owned())
            .to_owned();
        manager.exec_stmt(seed_default_project).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}
