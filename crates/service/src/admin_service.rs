use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use rand::rngs::OsRng;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::Deserialize;
use tracing::info;

use crate::errors::ServiceError;
use models::admin;

/// The seeded default head admin; exempt from deletion.
pub const PROTECTED_ADMIN_ID: i32 = 1;

/// Creation payload. Older frontends send `username`/`full_name`, newer ones
/// `email`/`fullName`; both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAdmin {
    #[serde(alias = "username")]
    pub email: Option<String>,
    #[serde(alias = "full_name", rename = "fullName")]
    pub full_name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// All admins ordered by id. Password hashes never leave this layer.
pub async fn list_admins(db: &DatabaseConnection) -> Result<Vec<admin::Model>, ServiceError> {
    admin::Entity::find()
        .order_by_asc(admin::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn create_admin(db: &DatabaseConnection, input: NewAdmin) -> Result<admin::Model, ServiceError> {
    let email = input.email.as_deref().map(str::trim).unwrap_or_default();
    let full_name = input.full_name.as_deref().map(str::trim).unwrap_or_default();
    let password = input.password.as_deref().unwrap_or_default();
    if email.is_empty() || full_name.is_empty() || password.is_empty() {
        return Err(ServiceError::Validation("Missing required fields".into()));
    }

    // Unknown roles silently fall back to the restricted one
    let role = match input.role.as_deref() {
        Some(admin::ROLE_HEAD_ADMIN) => admin::ROLE_HEAD_ADMIN,
        _ => admin::ROLE_INVENTORY_ADMIN,
    };

    if admin::find_by_email(db, email).await?.is_some() {
        return Err(ServiceError::Conflict("Email already exists".into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .to_string();

    let created = admin::create(db, full_name, email, &hash, role).await?;
    info!(admin_id = created.id, role, "admin_created");
    Ok(created)
}

/// Delete an admin account. The default admin (id 1) is protected.
pub async fn delete_admin(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    if id == PROTECTED_ADMIN_ID {
        return Err(ServiceError::Forbidden("Cannot delete default admin".into()));
    }
    admin::hard_delete(db, id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    fn new_admin(email: String, role: Option<&str>) -> NewAdmin {
        NewAdmin {
            email: Some(email),
            full_name: Some("Makerspace Admin".into()),
            password: Some("hunter2hunter2".into()),
            role: role.map(str::to_string),
        }
    }

    #[test]
    fn payload_accepts_both_field_spellings() {
        let a: NewAdmin =
            serde_json::from_str(r#"{"username":"a@b.c","full_name":"A B","password":"x"}"#).unwrap();
        assert_eq!(a.email.as_deref(), Some("a@b.c"));
        assert_eq!(a.full_name.as_deref(), Some("A B"));

        let b: NewAdmin =
            serde_json::from_str(r#"{"email":"a@b.c","fullName":"A B","password":"x"}"#).unwrap();
        assert_eq!(b.email.as_deref(), Some("a@b.c"));
        assert_eq!(b.full_name.as_deref(), Some("A B"));
    }

    #[tokio::test]
    async fn create_conflicts_and_role_fallback() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };

        let email = format!("svc_{}@example.com", Uuid::new_v4());
        let created = create_admin(&db, new_admin(email.clone(), Some("SUPER_DUPER_ADMIN"))).await?;
        assert_eq!(created.role, admin::ROLE_INVENTORY_ADMIN);
        assert_ne!(created.password_hash, "hunter2hunter2");

        let res = create_admin(&db, new_admin(email, None)).await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))));

        delete_admin(&db, created.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn default_admin_is_protected() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let res = delete_admin(&db, PROTECTED_ADMIN_ID).await;
        assert!(matches!(res, Err(ServiceError::Forbidden(_))));
        Ok(())
    }

    #[tokio::test]
    async fn missing_fields_rejected() -> anyhow::Result<()> {
        let Some(db) = get_db().await else { return Ok(()) };
        let res = create_admin(
            &db,
            NewAdmin { email: None, full_name: None, password: None, role: None },
        )
        .await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
