use async_trait::async_trait;

use super::domain::AdminRecord;
use super::errors::AuthError;

/// Repository abstraction for admin-account lookup.
#[async_trait]
pub trait AdminAuthRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AuthError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAdminRepository {
        admins: Mutex<HashMap<String, AdminRecord>>, // key: email
    }

    impl MockAdminRepository {
        pub fn insert(&self, rec: AdminRecord) {
            self.admins.lock().unwrap().insert(rec.email.clone(), rec);
        }
    }

    #[async_trait]
    impl AdminAuthRepository for MockAdminRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<AdminRecord>, AuthError> {
            let admins = self.admins.lock().unwrap();
            Ok(admins.get(email).cloned())
        }
    }
}
