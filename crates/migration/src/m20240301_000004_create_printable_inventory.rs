//! Create `printable_inventory` table with FK to `printable_items`.
//!
//! One row per (item, size, color) variant; the unique constraint on that
//! triple lives in the index migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrintableInventory::Table)
                    .if_not_exists()
                    .col(pk_auto(PrintableInventory::Id))
                    .col(integer(PrintableInventory::ItemId).not_null())
                    .col(string_len(PrintableInventory::Size, 32).not_null())
                    .col(string_len(PrintableInventory::Color, 64).not_null())
                    .col(integer(PrintableInventory::Quantity).not_null().default(0))
                    .col(integer(PrintableInventory::ReorderLevel).not_null().default(10))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_item")
                            .from(PrintableInventory::Table, PrintableInventory::ItemId)
                            .to(PrintableItem::Table, PrintableItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PrintableInventory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PrintableInventory {
    #[sea_orm(iden = "printable_inventory")]
    Table,
    Id,
    ItemId,
    Size,
    Color,
    Quantity,
    ReorderLevel,
}

#[derive(DeriveIden)]
enum PrintableItem {
    #[sea_orm(iden = "printable_items")]
    Table,
    Id,
}
