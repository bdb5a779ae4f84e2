use std::sync::Arc;

use argon2::{password_hash::PasswordVerifier, Argon2, PasswordHash};
use jsonwebtoken::{encode, EncodingKey, Header as JwtHeader};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::domain::{AdminProfile, AuthSession, LoginInput};
use super::errors::AuthError;
use super::repository::AdminAuthRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { jwt_secret: None, token_ttl_hours: 12 }
    }
}

/// JWT claims attached to admin sessions; the middleware decodes these on
/// every protected request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: i32,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// Auth business service independent of web framework
pub struct AuthService<R: AdminAuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AdminAuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        Self { repo, cfg }
    }

    /// Verify credentials and issue a session.
    ///
    /// Unknown email and wrong password return the same `Unauthorized`
    /// error; a disabled account only reports `Disabled` after the password
    /// verified.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let username = input.username.trim();
        if username.is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation);
        }

        let record = self
            .repo
            .find_by_email(username)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed = PasswordHash::new(&record.password_hash)
            .map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed)
            .is_err()
        {
            return Err(AuthError::Unauthorized);
        }

        if !record.is_active {
            return Err(AuthError::Disabled);
        }

        let mut token = None;
        if let Some(secret) = &self.cfg.jwt_secret {
            let now = chrono::Utc::now();
            let claims = Claims {
                sub: record.email.clone(),
                uid: record.id,
                role: record.role.clone(),
                exp: (now + chrono::Duration::hours(self.cfg.token_ttl_hours)).timestamp() as usize,
                iat: now.timestamp() as usize,
            };
            token = Some(
                encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
                    .map_err(|e| AuthError::TokenError(e.to_string()))?,
            );
        }

        info!(admin_id = record.id, role = %record.role, "admin_logged_in");
        Ok(AuthSession {
            admin: AdminProfile {
                id: record.id,
                username: record.email,
                full_name: record.full_name,
                role: record.role,
            },
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::AdminRecord;
    use crate::auth::repository::mock::MockAdminRepository;
    use argon2::password_hash::SaltString;
    use argon2::PasswordHasher;
    use rand::rngs::OsRng;

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    fn service_with(records: Vec<AdminRecord>) -> AuthService<MockAdminRepository> {
        let repo = MockAdminRepository::default();
        for r in records {
            repo.insert(r);
        }
        AuthService::new(
            Arc::new(repo),
            AuthConfig { jwt_secret: Some("test-secret".into()), token_ttl_hours: 12 },
        )
    }

    fn admin(email: &str, password: &str, active: bool) -> AdminRecord {
        AdminRecord {
            id: 7,
            email: email.into(),
            full_name: "Kari Nordmann".into(),
            password_hash: hash(password),
            role: "HEAD_ADMIN".into(),
            is_active: active,
        }
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_look_identical() {
        let svc = service_with(vec![admin("real@x.com", "rightpass", true)]);

        let missing = svc
            .login(LoginInput { username: "missing@x.com".into(), password: "anything".into() })
            .await
            .unwrap_err();
        let wrong = svc
            .login(LoginInput { username: "real@x.com".into(), password: "wrongpass".into() })
            .await
            .unwrap_err();

        assert_eq!(missing.to_string(), wrong.to_string());
        assert!(matches!(missing, AuthError::Unauthorized));
        assert!(matches!(wrong, AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn disabled_account_is_forbidden_after_verification() {
        let svc = service_with(vec![admin("off@x.com", "pw123456", false)]);
        let err = svc
            .login(LoginInput { username: "off@x.com".into(), password: "pw123456".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Disabled));

        // Wrong password on a disabled account still reads as bad credentials
        let err = svc
            .login(LoginInput { username: "off@x.com".into(), password: "nope".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn success_returns_profile_and_token_without_hash() {
        let svc = service_with(vec![admin("kari@x.com", "pw123456", true)]);
        let session = svc
            .login(LoginInput { username: "kari@x.com".into(), password: "pw123456".into() })
            .await
            .unwrap();
        assert_eq!(session.admin.id, 7);
        assert_eq!(session.admin.username, "kari@x.com");
        assert_eq!(session.admin.role, "HEAD_ADMIN");
        let token = session.token.expect("token issued");
        assert_eq!(token.split('.').count(), 3);
    }

    #[tokio::test]
    async fn empty_credentials_are_a_validation_error() {
        let svc = service_with(vec![]);
        let err = svc
            .login(LoginInput { username: "  ".into(), password: "".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation));
    }
}
