use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Append-only stock audit row. `qty_change` carries the new absolute
/// quantity of the variant at write time, not a delta.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "printable_transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_id: i32,
    pub size: String,
    pub color: String,
    pub qty_change: i32,
    pub reason: String,
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn append(
    db: &DatabaseConnection,
    item_id: i32,
    size: &str,
    color: &str,
    qty_change: i32,
    reason: &str,
    notes: Option<String>,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        item_id: Set(item_id),
        size: Set(size.to_string()),
        color: Set(color.to_string()),
        qty_change: Set(qty_change),
        reason: Set(reason.to_string()),
        notes: Set(notes),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
