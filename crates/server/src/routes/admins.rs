use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::json;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;
use crate::routes::catalog::IdQuery;
use models::admin;
use service::admin_service::{self, NewAdmin};

/// Account listing; the hash never leaves the service layer.
#[derive(Debug, Serialize)]
struct AdminView {
    id: i32,
    #[serde(rename = "fullName")]
    full_name: String,
    username: String,
    role: String,
    #[serde(rename = "isActive")]
    is_active: bool,
    #[serde(rename = "createdAt")]
    created_at: DateTime<FixedOffset>,
}

impl From<admin::Model> for AdminView {
    fn from(a: admin::Model) -> Self {
        Self {
            id: a.id,
            full_name: a.full_name,
            username: a.email,
            role: a.role,
            is_active: a.is_active,
            created_at: a.created_at,
        }
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<impl IntoResponse, ApiError> {
    let admins: Vec<AdminView> = admin_service::list_admins(&state.db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(admins))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewAdmin>,
) -> Result<impl IntoResponse, ApiError> {
    let a = admin_service::create_admin(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "id": a.id,
            "username": a.email,
            "fullName": a.full_name,
            "role": a.role,
        })),
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = q
        .id
        .filter(|v| *v > 0)
        .ok_or_else(|| ApiError::BadRequest("Invalid id".into()))?;
    admin_service::delete_admin(&state.db, id).await?;
    Ok(Json(json!({ "success": true })))
}
