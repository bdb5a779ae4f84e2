//! Create `admins` table.
//!
//! The first row (id = 1) is the protected default head admin; the schema
//! does not encode that rule, deletion guards do.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(pk_auto(Admin::Id))
                    .col(string_len(Admin::FullName, 128).not_null())
                    .col(string_len(Admin::Email, 255).unique_key().not_null())
                    .col(string_len(Admin::PasswordHash, 255).not_null())
                    .col(string_len(Admin::Role, 32).not_null())
                    .col(boolean(Admin::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Admin::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Admin::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Admin {
    #[sea_orm(iden = "admins")]
    Table,
    Id,
    FullName,
    Email,
    PasswordHash,
    Role,
    IsActive,
    CreatedAt,
}
