use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Inventory: one row per (item, size, color)
        manager
            .create_index(
                Index::create()
                    .name("uniq_inventory_item_size_color")
                    .table(PrintableInventory::Table)
                    .col(PrintableInventory::ItemId)
                    .col(PrintableInventory::Size)
                    .col(PrintableInventory::Color)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Inventory: index on item_id for per-item listing
        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_item")
                    .table(PrintableInventory::Table)
                    .col(PrintableInventory::ItemId)
                    .to_owned(),
            )
            .await?;

        // Transactions: index on item_id for audit lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_transaction_item")
                    .table(PrintableTransaction::Table)
                    .col(PrintableTransaction::ItemId)
                    .to_owned(),
            )
            .await?;

        // Reports and tasks list newest-first
        manager
            .create_index(
                Index::create()
                    .name("idx_report_created")
                    .table(Report::Table)
                    .col(Report::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_task_created")
                    .table(Task::Table)
                    .col(Task::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_inventory_item_size_color").table(PrintableInventory::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_inventory_item").table(PrintableInventory::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_transaction_item").table(PrintableTransaction::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_report_created").table(Report::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_task_created").table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PrintableInventory {
    #[sea_orm(iden = "printable_inventory")]
    Table,
    ItemId,
    Size,
    Color,
}

#[derive(DeriveIden)]
enum PrintableTransaction {
    #[sea_orm(iden = "printable_transactions")]
    Table,
    ItemId,
}

#[derive(DeriveIden)]
enum Report {
    #[sea_orm(iden = "reports")]
    Table,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Task {
    #[sea_orm(iden = "admin_tasks")]
    Table,
    CreatedAt,
}
