use std::fmt::Write as _;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;
use models::product;
use service::catalog_service::{self, NewProduct, ProductPatch};

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<i32>,
}

/// Percent-encode for the placeholder image URL: unreserved bytes pass,
/// spaces become `+`, everything else is `%XX`.
pub fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => out.push(b as char),
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{:02X}", b);
            }
        }
    }
    out
}

/// Frontend-facing fields the rows don't store: a placeholder image when
/// none was uploaded, and a manual slug derived from the name.
fn synthesize(name: &str, image_url: Option<&str>) -> (String, String) {
    let img = match image_url {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => format!("https://via.placeholder.com/320x220?text={}", urlencode(name)),
    };
    let manual = format!("{}.html", name.to_lowercase().replace(' ', "-"));
    (img, manual)
}

#[derive(Debug, Serialize)]
struct ProductListView {
    id: i32,
    sku: Option<String>,
    name: String,
    description: String,
    unit: String,
    image_url: Option<String>,
    is_active: bool,
    img: String,
    manual: String,
}

impl From<product::Model> for ProductListView {
    fn from(p: product::Model) -> Self {
        let (img, manual) = synthesize(&p.name, p.image_url.as_deref());
        Self {
            id: p.id,
            sku: p.sku,
            name: p.name,
            description: p.description,
            unit: p.unit,
            image_url: p.image_url,
            is_active: p.is_active,
            img,
            manual,
        }
    }
}

#[derive(Debug, Serialize)]
struct ProductDetailView {
    id: i32,
    sku: Option<String>,
    name: String,
    description: String,
    unit: String,
    manual_content: Option<String>,
    image_url: Option<String>,
    is_active: bool,
    img: String,
    manual: String,
}

impl From<product::Model> for ProductDetailView {
    fn from(p: product::Model) -> Self {
        let (img, manual) = synthesize(&p.name, p.image_url.as_deref());
        Self {
            id: p.id,
            sku: p.sku,
            name: p.name,
            description: p.description,
            unit: p.unit,
            manual_content: p.manual_content,
            image_url: p.image_url,
            is_active: p.is_active,
            img,
            manual,
        }
    }
}

pub async fn get_or_list(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
) -> Result<Response, ApiError> {
    match q.id {
        Some(id) => {
            let p = catalog_service::get_product(&state.db, id).await?;
            Ok(Json(ProductDetailView::from(p)).into_response())
        }
        None => {
            let list: Vec<ProductListView> = catalog_service::list_products(&state.db)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
            Ok(Json(list).into_response())
        }
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewProduct>,
) -> Result<impl IntoResponse, ApiError> {
    let p = catalog_service::create_product(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Product created successfully", "id": p.id })),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
    Json(patch): Json<ProductPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let id = q.id.ok_or_else(|| ApiError::BadRequest("Product ID required".into()))?;
    catalog_service::update_product(&state.db, id, patch).await?;
    Ok(Json(json!({ "message": "Product updated successfully" })))
}

pub async fn delete(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = q.id.ok_or_else(|| ApiError::BadRequest("Product ID required".into()))?;
    catalog_service::delete_product(&state.db, id).await?;
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
