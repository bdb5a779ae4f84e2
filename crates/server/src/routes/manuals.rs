use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;
use crate::routes::catalog::IdQuery;
use service::manual_service::{self, ManualView};

#[derive(Debug, Deserialize)]
pub struct ManualBody {
    pub manual_content: Option<String>,
}

pub async fn get(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
) -> Result<Json<ManualView>, ApiError> {
    let id = q.id.ok_or_else(|| ApiError::BadRequest("Product ID required".into()))?;
    Ok(Json(manual_service::get_manual(&state.db, id).await?))
}

/// Overwrites the manual. An unknown product id affects zero rows and still
/// reports success; the frontend treats the save button as idempotent.
pub async fn update(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
    Json(body): Json<ManualBody>,
) -> Result<impl IntoResponse, ApiError> {
    let id = q.id.ok_or_else(|| ApiError::BadRequest("Product ID required".into()))?;
    let content = body
        .manual_content
        .ok_or_else(|| ApiError::BadRequest("Manual content required".into()))?;
    manual_service::update_manual(&state.db, id, &content).await?;
    Ok(Json(json!({ "message": "Manual updated successfully" })))
}
