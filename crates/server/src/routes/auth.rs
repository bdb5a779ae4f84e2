use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, Method};
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;
use jsonwebtoken::{decode, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use service::auth::domain::LoginInput;
use service::auth::repo::seaorm::SeaOrmAdminRepository;
use service::auth::service::{AuthConfig, AuthService, Claims};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

fn auth_service(state: &ServerState) -> AuthService<SeaOrmAdminRepository> {
    AuthService::new(
        Arc::new(SeaOrmAdminRepository { db: state.db.clone() }),
        AuthConfig { jwt_secret: Some(state.jwt_secret.clone()), token_ttl_hours: 12 },
    )
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: i32,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub role: String,
    pub token: String,
}

pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>, ApiError> {
    let input = LoginInput {
        username: payload.username.unwrap_or_default(),
        password: payload.password.unwrap_or_default(),
    };
    let session = auth_service(&state).login(input).await?;
    let token = session
        .token
        .ok_or_else(|| ApiError::Internal("token issuance failed".into()))?;
    Ok(Json(LoginResponse {
        id: session.admin.id,
        username: session.admin.username,
        full_name: session.admin.full_name,
        role: session.admin.role,
        token,
    }))
}

/// Endpoints reachable without a session. Everything else wants a bearer
/// token; CORS preflights always pass.
fn is_public(method: &Method, path: &str) -> bool {
    if method == Method::OPTIONS {
        return true;
    }
    match path {
        "/health" => method == Method::GET,
        "/api/auth/login" => method == Method::POST,
        "/api/products" | "/api/manuals" => method == Method::GET,
        "/api/reports" => method == Method::POST,
        _ => false,
    }
}

/// Account and task management stay with the head admin.
fn requires_head_admin(path: &str) -> bool {
    path.starts_with("/api/admins") || path.starts_with("/api/tasks")
}

pub async fn require_bearer_token_state(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    if is_public(&method, &path) {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string());
    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => return Err(ApiError::Unauthorized("Missing bearer token".into())),
    };

    let decoded = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Unauthorized("Invalid or expired token".into()))?;

    // A token outlives account changes, so the account is re-read on every
    // request: deactivation or deletion takes effect immediately instead of
    // at token expiry, and the role check uses the stored role.
    let account = models::admin::find_by_email(&state.db, &decoded.claims.sub)
        .await
        .map_err(|e| ApiError::Internal(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::Unauthorized("Invalid or expired token".into()))?;
    if !account.is_active {
        return Err(ApiError::Forbidden("Account disabled".into()));
    }

    if requires_head_admin(&path) && account.role != models::admin::ROLE_HEAD_ADMIN {
        return Err(ApiError::Forbidden("Head admin role required".into()));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_whitelist_is_method_aware() {
        assert!(is_public(&Method::GET, "/health"));
        assert!(is_public(&Method::POST, "/api/auth/login"));
        assert!(is_public(&Method::GET, "/api/products"));
        assert!(is_public(&Method::GET, "/api/manuals"));
        assert!(is_public(&Method::POST, "/api/reports"));
        assert!(is_public(&Method::OPTIONS, "/api/admins"));

        assert!(!is_public(&Method::POST, "/api/products"));
        assert!(!is_public(&Method::PUT, "/api/manuals"));
        assert!(!is_public(&Method::GET, "/api/reports"));
        assert!(!is_public(&Method::GET, "/api/printable-items"));
    }

    #[test]
    fn head_admin_paths() {
        assert!(requires_head_admin("/api/admins"));
        assert!(requires_head_admin("/api/tasks"));
        assert!(!requires_head_admin("/api/products"));
        assert!(!requires_head_admin("/api/printable-inventory"));
    }
}
