use serde::{Deserialize, Serialize};

/// Login input; `username` is the admin's email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Stored account view used by the service layer; includes the hash and the
/// active flag, never leaves the service.
#[derive(Debug, Clone)]
pub struct AdminRecord {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
}

/// Profile returned to callers on success; deliberately hash-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub role: String,
}

/// Login result (session)
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub admin: AdminProfile,
    pub token: Option<String>,
}
