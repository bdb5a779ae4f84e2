use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use crate::errors::ServiceError;
use models::task;

#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub title: Option<String>,
    pub description: Option<String>,
    // Accepted but ignored: new tasks always start OPEN
    pub status: Option<String>,
}

/// All tasks, newest first.
pub async fn list_tasks(db: &DatabaseConnection) -> Result<Vec<task::Model>, ServiceError> {
    task::Entity::find()
        .order_by_desc(task::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn create_task(db: &DatabaseConnection, input: NewTask) -> Result<task::Model, ServiceError> {
    let title = match input.title.as_deref() {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(ServiceError::Validation("Title required".into())),
    };
    let description = input.description.unwrap_or_default();
    let created = task::create(db, title, &description, "OPEN").await?;
    Ok(created)
}

/// Status is stored upper-case regardless of the caller's casing.
pub async fn update_status(db: &DatabaseConnection, id: i32, status: &str) -> Result<(), ServiceError> {
    let mut am: task::ActiveModel = task::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Task"))?
        .into();
    am.status = Set(status.to_uppercase());
    am.updated_at = Set(Some(Utc::now().into()));
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

pub async fn delete_task(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    task::hard_delete(db, id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn create_forces_open_and_upcases_updates() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };

        let input = NewTask {
            title: Some("Calibrate printers".into()),
            description: None,
            status: Some("done".into()),
        };
        let t = create_task(&db, input).await?;
        assert_eq!(t.status, "OPEN");

        update_status(&db, t.id, "in progress").await?;
        let listed = list_tasks(&db).await?;
        let found = listed.iter().find(|x| x.id == t.id).expect("task listed");
        assert_eq!(found.status, "IN PROGRESS");

        delete_task(&db, t.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn title_is_required() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let res = create_task(&db, NewTask { title: None, description: None, status: None }).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
