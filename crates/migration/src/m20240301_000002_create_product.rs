//! Create `products` table.
//!
//! `manual_content` holds the manual HTML blob; `image_url` may store an
//! entire base64 data URL, hence text.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string_len_null(Product::Sku, 64))
                    .col(string_len(Product::Name, 255).not_null())
                    .col(text(Product::Description).not_null())
                    .col(string_len(Product::Unit, 32).not_null())
                    .col(text_null(Product::ManualContent))
                    .col(text_null(Product::ImageUrl))
                    .col(boolean(Product::IsActive).not_null().default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    #[sea_orm(iden = "products")]
    Table,
    Id,
    Sku,
    Name,
    Description,
    Unit,
    ManualContent,
    ImageUrl,
    IsActive,
}
