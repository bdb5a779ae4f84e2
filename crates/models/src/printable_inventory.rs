use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::printable_item;

/// One stock-keeping variant: a (size, color) pair under a printable item.
/// Unique on (item_id, size, color).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "printable_inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_id: i32,
    pub size: String,
    pub color: String,
    pub quantity: i32,
    pub reorder_level: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Item,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Item => Entity::belongs_to(printable_item::Entity)
                .from(Column::ItemId)
                .to(printable_item::Column::Id)
                .into(),
        }
    }
}

impl Related<printable_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    item_id: i32,
    size: &str,
    color: &str,
    quantity: i32,
    reorder_level: i32,
) -> Result<Model, DbErr> {
    // Caller maps unique-constraint DbErr to a conflict
    let am = ActiveModel {
        item_id: Set(item_id),
        size: Set(size.to_string()),
        color: Set(color.to_string()),
        quantity: Set(quantity),
        reorder_level: Set(reorder_level),
        ..Default::default()
    };
    am.insert(db).await
}

pub async fn hard_delete(db: &DatabaseConnection, id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
