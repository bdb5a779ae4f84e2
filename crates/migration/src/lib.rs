//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_admin;
mod m20240301_000002_create_product;
mod m20240301_000003_create_printable_item;
mod m20240301_000004_create_printable_inventory;
mod m20240301_000005_create_printable_transaction;
mod m20240301_000006_create_report;
mod m20240301_000007_create_task;
mod m20240301_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_admin::Migration),
            Box::new(m20240301_000002_create_product::Migration),
            Box::new(m20240301_000003_create_printable_item::Migration),
            Box::new(m20240301_000004_create_printable_inventory::Migration),
            Box::new(m20240301_000005_create_printable_transaction::Migration),
            Box::new(m20240301_000006_create_report::Migration),
            Box::new(m20240301_000007_create_task::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000008_add_indexes::Migration),
        ]
    }
}
