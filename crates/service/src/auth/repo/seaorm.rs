use sea_orm::DatabaseConnection;

use crate::auth::domain::AdminRecord;
use crate::auth::errors::AuthError;
use crate::auth::repository::AdminAuthRepository;

pub struct SeaOrmAdminRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AdminAuthRepository for SeaOrmAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AuthError> {
        let res = models::admin::find_by_email(&self.db, email)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|a| AdminRecord {
            id: a.id,
            email: a.email,
            full_name: a.full_name,
            password_hash: a.password_hash,
            role: a.role,
            is_active: a.is_active,
        }))
    }
}
