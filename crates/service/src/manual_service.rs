use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;

use crate::errors::ServiceError;
use models::product;

#[derive(Debug, Clone, Serialize)]
pub struct ManualView {
    pub id: i32,
    pub name: String,
    pub content: String,
}

/// Manual for an active product; inactive or missing products read as
/// not found.
pub async fn get_manual(db: &DatabaseConnection, product_id: i32) -> Result<ManualView, ServiceError> {
    let found = product::Entity::find_by_id(product_id)
        .filter(product::Column::IsActive.eq(true))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Product"))?;
    Ok(ManualView {
        id: found.id,
        name: found.name,
        content: found
            .manual_content
            .unwrap_or_else(|| product::MANUAL_PLACEHOLDER.to_string()),
    })
}

/// Overwrite the manual column. An unknown product id affects zero rows and
/// still reads as success; the affected-row count is returned so callers can
/// decide, the HTTP layer deliberately ignores it.
pub async fn update_manual(db: &DatabaseConnection, product_id: i32, content: &str) -> Result<u64, ServiceError> {
    let res = product::Entity::update_many()
        .col_expr(product::Column::ManualContent, Expr::value(content.to_string()))
        .filter(product::Column::Id.eq(product_id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_service::{self, NewProduct, ProductPatch};
    use crate::test_support::get_db;

    fn named(name: &str) -> NewProduct {
        NewProduct {
            name: Some(name.to_string()),
            sku: None,
            description: None,
            unit: None,
            manual_content: None,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn placeholder_and_overwrite() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let p = catalog_service::create_product(&db, named("CNC Mill")).await?;

        let m = get_manual(&db, p.id).await?;
        assert_eq!(m.content, models::product::MANUAL_PLACEHOLDER);

        let affected = update_manual(&db, p.id, "<h1>Steps</h1>").await?;
        assert_eq!(affected, 1);
        let m = get_manual(&db, p.id).await?;
        assert_eq!(m.content, "<h1>Steps</h1>");

        catalog_service::delete_product(&db, p.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn inactive_product_reads_not_found() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let p = catalog_service::create_product(&db, named("Retired Press")).await?;
        let patch = ProductPatch { is_active: Some(false), ..Default::default() };
        catalog_service::update_product(&db, p.id, patch).await?;

        let res = get_manual(&db, p.id).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        catalog_service::delete_product(&db, p.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_update_affects_zero_rows() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let affected = update_manual(&db, 0, "<p>ghost</p>").await?;
        assert_eq!(affected, 0);
        Ok(())
    }
}
