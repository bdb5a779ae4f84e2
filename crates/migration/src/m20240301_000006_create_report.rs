//! Create `reports` table (user-submitted issue reports).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Report::Table)
                    .if_not_exists()
                    .col(pk_auto(Report::Id))
                    .col(string_len(Report::ReporterName, 128).not_null())
                    .col(text(Report::AboutText).not_null())
                    .col(boolean(Report::IsImportant).not_null().default(false))
                    .col(string_len(Report::Status, 32).not_null())
                    .col(timestamp_with_time_zone(Report::CreatedAt).not_null())
                    .col(
                        ColumnDef::new(Report::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Report::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Report {
    #[sea_orm(iden = "reports")]
    Table,
    Id,
    ReporterName,
    AboutText,
    IsImportant,
    Status,
    CreatedAt,
    UpdatedAt,
}
