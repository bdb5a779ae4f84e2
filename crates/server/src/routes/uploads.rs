use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;
use service::catalog_service;

/// Images travel as base64 data URLs in the JSON body, no multipart.
#[derive(Debug, Deserialize)]
pub struct UploadPayload {
    pub product_id: Option<i32>,
    pub image_data: Option<String>,
}

pub async fn upload_image(
    State(state): State<ServerState>,
    Json(payload): Json<UploadPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(product_id), Some(image_data)) = (payload.product_id, payload.image_data) else {
        return Err(ApiError::BadRequest("Missing product_id or image_data".into()));
    };
    if image_data.is_empty() {
        return Err(ApiError::BadRequest("Missing product_id or image_data".into()));
    }

    catalog_service::set_product_image(&state.db, product_id, &image_data).await?;
    info!(product_id, bytes = image_data.len(), "product_image_stored");

    Ok(Json(json!({
        "message": "Image uploaded successfully",
        "product_id": product_id,
        "image_data_length": image_data.len(),
    })))
}
