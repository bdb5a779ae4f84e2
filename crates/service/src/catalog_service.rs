use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use crate::errors::ServiceError;
use models::product;

/// Creation payload; only `name` is mandatory, the rest falls back to the
/// catalog defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub manual_content: Option<String>,
    pub is_active: Option<bool>,
}

/// Partial update; unset fields keep their stored values. The field list is
/// the column allow-list, there is no dynamic SQL building.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub manual_content: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sku.is_none()
            && self.description.is_none()
            && self.unit.is_none()
            && self.manual_content.is_none()
            && self.image_url.is_none()
            && self.is_active.is_none()
    }
}

/// All products ordered by id.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>, ServiceError> {
    product::Entity::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn get_product(db: &DatabaseConnection, id: i32) -> Result<product::Model, ServiceError> {
    product::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Product"))
}

pub async fn create_product(db: &DatabaseConnection, input: NewProduct) -> Result<product::Model, ServiceError> {
    let name = match input.name.as_deref() {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(ServiceError::Validation("Name is required".into())),
    };
    let sku = input.sku.filter(|s| !s.is_empty());
    let description = input.description.unwrap_or_default();
    let unit = input.unit.unwrap_or_else(|| "unit".to_string());
    let manual = input
        .manual_content
        .unwrap_or_else(|| product::MANUAL_PLACEHOLDER.to_string());
    let is_active = input.is_active.unwrap_or(true);
    let created = product::create(db, sku, name, &description, &unit, &manual, is_active).await?;
    Ok(created)
}

pub async fn update_product(db: &DatabaseConnection, id: i32, patch: ProductPatch) -> Result<(), ServiceError> {
    if patch.is_empty() {
        return Err(ServiceError::Validation("No fields to update".into()));
    }
    let mut am: product::ActiveModel = product::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Product"))?
        .into();
    if let Some(v) = patch.name {
        am.name = Set(v);
    }
    if let Some(v) = patch.sku {
        am.sku = Set(Some(v));
    }
    if let Some(v) = patch.description {
        am.description = Set(v);
    }
    if let Some(v) = patch.unit {
        am.unit = Set(v);
    }
    if let Some(v) = patch.manual_content {
        am.manual_content = Set(Some(v));
    }
    if let Some(v) = patch.image_url {
        am.image_url = Set(Some(v));
    }
    if let Some(v) = patch.is_active {
        am.is_active = Set(v);
    }
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

pub async fn delete_product(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    product::hard_delete(db, id).await?;
    Ok(())
}

/// Store a base64 data URL verbatim as the product image. No re-encoding,
/// no size limit beyond what the transport accepts.
pub async fn set_product_image(db: &DatabaseConnection, id: i32, image_data: &str) -> Result<(), ServiceError> {
    if !image_data.starts_with("data:image/") {
        return Err(ServiceError::Validation(
            "Invalid image data format. Must start with \"data:image/\"".into(),
        ));
    }
    let mut am: product::ActiveModel = product::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Product"))?
        .into();
    am.image_url = Set(Some(image_data.to_string()));
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn new_named(name: &str) -> NewProduct {
        NewProduct {
            name: Some(name.to_string()),
            sku: None,
            description: None,
            unit: None,
            manual_content: None,
            is_active: None,
        }
    }

    #[test]
    fn patch_emptiness() {
        assert!(ProductPatch::default().is_empty());
        let p = ProductPatch { unit: Some("stk".into()), ..Default::default() };
        assert!(!p.is_empty());
    }

    #[tokio::test]
    async fn create_defaults_roundtrip() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let created = create_product(&db, new_named("Widget")).await?;
        let fetched = get_product(&db, created.id).await?;
        assert_eq!(fetched.name, "Widget");
        assert_eq!(fetched.sku, None);
        assert_eq!(fetched.unit, "unit");
        assert_eq!(fetched.manual_content.as_deref(), Some(models::product::MANUAL_PLACEHOLDER));
        assert!(fetched.is_active);
        delete_product(&db, created.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let created = create_product(&db, new_named("Bandsaw")).await?;

        let patch = ProductPatch { unit: Some("stk".into()), ..Default::default() };
        update_product(&db, created.id, patch).await?;

        let after = get_product(&db, created.id).await?;
        assert_eq!(after.unit, "stk");
        assert_eq!(after.name, "Bandsaw");
        assert_eq!(after.sku, None);
        assert!(after.is_active);

        delete_product(&db, created.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn empty_patch_is_validation_error() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let created = create_product(&db, new_named("Drill")).await?;
        let res = update_product(&db, created.id, ProductPatch::default()).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        delete_product(&db, created.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn image_prefix_is_enforced() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let created = create_product(&db, new_named("Camera")).await?;

        let res = set_product_image(&db, created.id, "http://example.com/pic.png").await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));

        set_product_image(&db, created.id, "data:image/png;base64,iVBORw0KGgo=").await?;
        let after = get_product(&db, created.id).await?;
        assert_eq!(after.image_url.as_deref(), Some("data:image/png;base64,iVBORw0KGgo="));

        // Unknown product id is a not-found, prefix still checked first
        let res = set_product_image(&db, 0, "nope").await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));

        delete_product(&db, created.id).await?;
        Ok(())
    }
}
