//! Create `printable_items` table (t-shirts, hoodies and other merch).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrintableItem::Table)
                    .if_not_exists()
                    .col(pk_auto(PrintableItem::Id))
                    .col(string_len(PrintableItem::Name, 255).not_null())
                    .col(text_null(PrintableItem::Description))
                    .col(string_len_null(PrintableItem::Category, 64))
                    .col(text_null(PrintableItem::ImageUrl))
                    .col(double(PrintableItem::Price).not_null().default(0.0))
                    .col(boolean(PrintableItem::IsActive).not_null().default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PrintableItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PrintableItem {
    #[sea_orm(iden = "printable_items")]
    Table,
    Id,
    Name,
    Description,
    Category,
    ImageUrl,
    Price,
    IsActive,
}
