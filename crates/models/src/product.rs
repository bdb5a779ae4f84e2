use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Manual HTML used when a product has none yet.
pub const MANUAL_PLACEHOLDER: &str = "<p>Ingen bruksanvisning opprettet enda</p>";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sku: Option<String>,
    pub name: String,
    pub description: String,
    pub unit: String,
    pub manual_content: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    sku: Option<String>,
    name: &str,
    description: &str,
    unit: &str,
    manual_content: &str,
    is_active: bool,
) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    let am = ActiveModel {
        sku: Set(sku),
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        unit: Set(unit.to_string()),
        manual_content: Set(Some(manual_content.to_string())),
        image_url: Set(None),
        is_active: Set(is_active),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
