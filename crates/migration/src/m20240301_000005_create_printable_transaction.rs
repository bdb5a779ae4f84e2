//! Create `printable_transactions` table (append-only stock audit trail).
//!
//! Rows copy item/size/color from the inventory row being updated; no FK so
//! the trail survives variant deletion. `qty_change` stores the new absolute
//! quantity, not a delta.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrintableTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(PrintableTransaction::Id))
                    .col(integer(PrintableTransaction::ItemId).not_null())
                    .col(string_len(PrintableTransaction::Size, 32).not_null())
                    .col(string_len(PrintableTransaction::Color, 64).not_null())
                    .col(integer(PrintableTransaction::QtyChange).not_null())
                    .col(string_len(PrintableTransaction::Reason, 128).not_null())
                    .col(text_null(PrintableTransaction::Notes))
                    .col(timestamp_with_time_zone(PrintableTransaction::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PrintableTransaction::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PrintableTransaction {
    #[sea_orm(iden = "printable_transactions")]
    Table,
    Id,
    ItemId,
    Size,
    Color,
    QtyChange,
    Reason,
    Notes,
    CreatedAt,
}
