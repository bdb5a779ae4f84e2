use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ServiceError;
use models::{printable_inventory, printable_item, printable_transaction};

#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image_url.is_none()
            && self.price.is_none()
            && self.is_active.is_none()
    }
}

/// Item plus quick stock aggregates for the list view.
#[derive(Debug, Clone, Serialize)]
pub struct ItemSummary {
    #[serde(flatten)]
    pub item: printable_item::Model,
    pub total_quantity: i64,
    pub variants: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewVariant {
    pub item_id: Option<i32>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: Option<i32>,
    pub reorder_level: Option<i32>,
}

/// Variant partial update. `reason`/`notes` are not columns: together with a
/// quantity change they drive the audit append.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantPatch {
    pub quantity: Option<i32>,
    pub reorder_level: Option<i32>,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

/// All items ordered by (category, name), each with stock totals.
pub async fn list_items(db: &DatabaseConnection) -> Result<Vec<ItemSummary>, ServiceError> {
    let items = printable_item::Entity::find()
        .order_by_asc(printable_item::Column::Category)
        .order_by_asc(printable_item::Column::Name)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let variants = printable_inventory::Entity::find()
            .filter(printable_inventory::Column::ItemId.eq(item.id))
            .all(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let total_quantity = variants.iter().map(|v| v.quantity as i64).sum();
        out.push(ItemSummary { item, total_quantity, variants: variants.len() as u64 });
    }
    Ok(out)
}

/// Single item with its full variant list.
pub async fn get_item(
    db: &DatabaseConnection,
    id: i32,
) -> Result<(printable_item::Model, Vec<printable_inventory::Model>), ServiceError> {
    let item = printable_item::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Item"))?;
    let inventory = printable_inventory::Entity::find()
        .filter(printable_inventory::Column::ItemId.eq(id))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok((item, inventory))
}

pub async fn create_item(db: &DatabaseConnection, input: NewItem) -> Result<printable_item::Model, ServiceError> {
    let name = match input.name.as_deref() {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(ServiceError::Validation("Missing required field: name".into())),
    };
    let created = printable_item::create(
        db,
        name,
        input.description,
        input.category,
        input.image_url,
        input.price.unwrap_or(0.0),
    )
    .await?;
    Ok(created)
}

pub async fn update_item(db: &DatabaseConnection, id: i32, patch: ItemPatch) -> Result<(), ServiceError> {
    let mut am: printable_item::ActiveModel = printable_item::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Item"))?
        .into();
    if patch.is_empty() {
        return Err(ServiceError::Validation("No fields to update".into()));
    }
    if let Some(v) = patch.name {
        am.name = Set(v);
    }
    if let Some(v) = patch.description {
        am.description = Set(Some(v));
    }
    if let Some(v) = patch.category {
        am.category = Set(Some(v));
    }
    if let Some(v) = patch.image_url {
        am.image_url = Set(Some(v));
    }
    if let Some(v) = patch.price {
        am.price = Set(v);
    }
    if let Some(v) = patch.is_active {
        am.is_active = Set(v);
    }
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

pub async fn delete_item(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    printable_item::hard_delete(db, id).await?;
    Ok(())
}

/// Variants of an item ordered by (size, color).
pub async fn list_variants(db: &DatabaseConnection, item_id: i32) -> Result<Vec<printable_inventory::Model>, ServiceError> {
    printable_inventory::Entity::find()
        .filter(printable_inventory::Column::ItemId.eq(item_id))
        .order_by_asc(printable_inventory::Column::Size)
        .order_by_asc(printable_inventory::Column::Color)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn create_variant(db: &DatabaseConnection, input: NewVariant) -> Result<printable_inventory::Model, ServiceError> {
    let (Some(item_id), Some(size), Some(color)) = (input.item_id, input.size, input.color) else {
        return Err(ServiceError::Validation(
            "Missing required fields: item_id, size, color".into(),
        ));
    };
    let exists = printable_item::Entity::find_by_id(item_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if exists.is_none() {
        return Err(ServiceError::not_found("Item"));
    }
    let quantity = input.quantity.unwrap_or(0);
    let reorder_level = input.reorder_level.unwrap_or(10);
    match printable_inventory::create(db, item_id, &size, &color, quantity, reorder_level).await {
        Ok(v) => Ok(v),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(ServiceError::Conflict(
                "This size/color combination already exists".into(),
            )),
            _ => Err(ServiceError::Db(e.to_string())),
        },
    }
}

/// Update a variant's quantity and/or reorder level. When both `quantity`
/// and `reason` are present, append one audit row carrying the new absolute
/// quantity as `qty_change`. The append runs after the primary update has
/// committed and is not wrapped in a transaction: a failed append leaves the
/// quantity change applied.
pub async fn update_variant(db: &DatabaseConnection, inv_id: i32, patch: VariantPatch) -> Result<(), ServiceError> {
    let current = printable_inventory::Entity::find_by_id(inv_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Inventory"))?;

    if patch.quantity.is_none() && patch.reorder_level.is_none() {
        return Err(ServiceError::Validation("No fields to update".into()));
    }

    let mut am: printable_inventory::ActiveModel = current.clone().into();
    if let Some(q) = patch.quantity {
        am.quantity = Set(q);
    }
    if let Some(r) = patch.reorder_level {
        am.reorder_level = Set(r);
    }
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;

    if let (Some(quantity), Some(reason)) = (patch.quantity, patch.reason.as_deref()) {
        if let Err(e) = printable_transaction::append(
            db,
            current.item_id,
            &current.size,
            &current.color,
            quantity,
            reason,
            patch.notes,
        )
        .await
        {
            warn!(inv_id, error = %e, "inventory updated but audit append failed");
            return Err(ServiceError::Db(e.to_string()));
        }
    }
    Ok(())
}

pub async fn delete_variant(db: &DatabaseConnection, inv_id: i32) -> Result<(), ServiceError> {
    printable_inventory::hard_delete(db, inv_id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    fn new_item(name: String, category: &str) -> NewItem {
        NewItem {
            name: Some(name),
            description: None,
            category: Some(category.to_string()),
            image_url: None,
            price: Some(199.0),
        }
    }

    fn new_variant(item_id: i32, size: &str, color: &str) -> NewVariant {
        NewVariant {
            item_id: Some(item_id),
            size: Some(size.to_string()),
            color: Some(color.to_string()),
            quantity: None,
            reorder_level: None,
        }
    }

    async fn audit_rows(db: &sea_orm::DatabaseConnection, item_id: i32) -> anyhow::Result<Vec<printable_transaction::Model>> {
        Ok(printable_transaction::Entity::find()
            .filter(printable_transaction::Column::ItemId.eq(item_id))
            .all(db)
            .await?)
    }

    #[tokio::test]
    async fn variant_defaults_and_conflict() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let item = create_item(&db, new_item(format!("Hoodie {}", Uuid::new_v4()), "hoodie")).await?;

        let v = create_variant(&db, new_variant(item.id, "M", "black")).await?;
        assert_eq!(v.quantity, 0);
        assert_eq!(v.reorder_level, 10);

        // Duplicate tuple conflicts regardless of quantity values
        let mut dup = new_variant(item.id, "M", "black");
        dup.quantity = Some(50);
        let res = create_variant(&db, dup).await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))));

        // Unknown parent item
        let res = create_variant(&db, new_variant(0, "S", "red")).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        delete_item(&db, item.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn quantity_with_reason_appends_one_audit_row() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let item = create_item(&db, new_item(format!("Tee {}", Uuid::new_v4()), "tshirt")).await?;
        let v = create_variant(&db, new_variant(item.id, "L", "white")).await?;

        // quantity without reason: no audit row
        update_variant(&db, v.id, VariantPatch { quantity: Some(7), ..Default::default() }).await?;
        assert!(audit_rows(&db, item.id).await?.is_empty());

        // quantity + reason: exactly one row with the new absolute quantity
        let patch = VariantPatch {
            quantity: Some(12),
            reason: Some("restock".into()),
            notes: Some("from print run".into()),
            ..Default::default()
        };
        update_variant(&db, v.id, patch).await?;
        let rows = audit_rows(&db, item.id).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].qty_change, 12);
        assert_eq!(rows[0].size, "L");
        assert_eq!(rows[0].color, "white");

        for row in rows {
            printable_transaction::Entity::delete_by_id(row.id).exec(&db).await?;
        }
        delete_item(&db, item.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_variant_requires_fields() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let item = create_item(&db, new_item(format!("Cap {}", Uuid::new_v4()), "cap")).await?;
        let v = create_variant(&db, new_variant(item.id, "OS", "navy")).await?;

        let res = update_variant(&db, v.id, VariantPatch::default()).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));

        let res = update_variant(&db, 0, VariantPatch { quantity: Some(1), ..Default::default() }).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        delete_item(&db, item.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn list_items_carries_totals() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let name = format!("Mug {}", Uuid::new_v4());
        let item = create_item(&db, new_item(name.clone(), "mug")).await?;
        let v1 = create_variant(&db, new_variant(item.id, "S", "blue")).await?;
        update_variant(&db, v1.id, VariantPatch { quantity: Some(3), ..Default::default() }).await?;
        create_variant(&db, new_variant(item.id, "S", "green")).await?;

        let items = list_items(&db).await?;
        let summary = items.iter().find(|s| s.item.id == item.id).expect("item listed");
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.variants, 2);

        let (got, inventory) = get_item(&db, item.id).await?;
        assert_eq!(got.name, name);
        assert_eq!(inventory.len(), 2);

        delete_item(&db, item.id).await?;
        Ok(())
    }
}
