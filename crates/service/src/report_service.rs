use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use crate::errors::ServiceError;
use models::report;

#[derive(Debug, Clone, Deserialize)]
pub struct NewReport {
    pub about_text: Option<String>,
    pub reporter_name: Option<String>,
    pub is_important: Option<bool>,
    pub status: Option<String>,
}

/// All reports, newest first.
pub async fn list_reports(db: &DatabaseConnection) -> Result<Vec<report::Model>, ServiceError> {
    report::Entity::find()
        .order_by_desc(report::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn create_report(db: &DatabaseConnection, input: NewReport) -> Result<report::Model, ServiceError> {
    let about_text = match input.about_text.as_deref() {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(ServiceError::Validation("Report text required".into())),
    };
    let reporter_name = input.reporter_name.unwrap_or_else(|| "Anonym".to_string());
    let is_important = input.is_important.unwrap_or(false);
    let status = input.status.unwrap_or_else(|| "NEW".to_string());
    let created = report::create(db, &reporter_name, about_text, is_important, &status).await?;
    Ok(created)
}

pub async fn update_status(db: &DatabaseConnection, id: i32, status: &str) -> Result<(), ServiceError> {
    let mut am: report::ActiveModel = report::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Report"))?
        .into();
    am.status = Set(status.to_string());
    am.updated_at = Set(Some(Utc::now().into()));
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

pub async fn delete_report(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    report::hard_delete(db, id).await?;
    Ok(())
}
