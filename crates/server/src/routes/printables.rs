use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;
use crate::routes::catalog::IdQuery;
use models::{printable_inventory, printable_item};
use service::printable_service::{self, ItemPatch, NewItem, NewVariant, VariantPatch};

#[derive(Debug, Deserialize)]
pub struct ItemIdQuery {
    pub item_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct InvIdQuery {
    pub inv_id: Option<i32>,
}

/// Variant row as the frontend sees it; the parent id is implicit in the
/// request.
#[derive(Debug, Serialize)]
struct VariantView {
    id: i32,
    size: String,
    color: String,
    quantity: i32,
    reorder_level: i32,
}

impl From<printable_inventory::Model> for VariantView {
    fn from(v: printable_inventory::Model) -> Self {
        Self {
            id: v.id,
            size: v.size,
            color: v.color,
            quantity: v.quantity,
            reorder_level: v.reorder_level,
        }
    }
}

#[derive(Debug, Serialize)]
struct ItemDetailView {
    #[serde(flatten)]
    item: printable_item::Model,
    inventory: Vec<VariantView>,
}

pub async fn items_get_or_list(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
) -> Result<Response, ApiError> {
    match q.id {
        Some(id) => {
            let (item, inventory) = printable_service::get_item(&state.db, id).await?;
            let view = ItemDetailView {
                item,
                inventory: inventory.into_iter().map(Into::into).collect(),
            };
            Ok(Json(view).into_response())
        }
        None => {
            let items = printable_service::list_items(&state.db).await?;
            Ok(Json(items).into_response())
        }
    }
}

pub async fn items_create(
    State(state): State<ServerState>,
    Json(input): Json<NewItem>,
) -> Result<impl IntoResponse, ApiError> {
    let item = printable_service::create_item(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Item created successfully", "id": item.id })),
    ))
}

pub async fn items_update(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
    Json(patch): Json<ItemPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let id = q.id.ok_or_else(|| ApiError::BadRequest("Item ID required".into()))?;
    printable_service::update_item(&state.db, id, patch).await?;
    Ok(Json(json!({ "message": "Item updated successfully" })))
}

pub async fn items_delete(
    State(state): State<ServerState>,
    Query(q): Query<IdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let id = q.id.ok_or_else(|| ApiError::BadRequest("Item ID required".into()))?;
    printable_service::delete_item(&state.db, id).await?;
    Ok(Json(json!({ "message": "Item deleted successfully" })))
}

pub async fn inventory_list(
    State(state): State<ServerState>,
    Query(q): Query<ItemIdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let item_id = q.item_id.ok_or_else(|| ApiError::BadRequest("Missing item_id".into()))?;
    let variants: Vec<VariantView> = printable_service::list_variants(&state.db, item_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(variants))
}

pub async fn inventory_create(
    State(state): State<ServerState>,
    Json(input): Json<NewVariant>,
) -> Result<impl IntoResponse, ApiError> {
    let v = printable_service::create_variant(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Inventory variant created", "id": v.id })),
    ))
}

pub async fn inventory_update(
    State(state): State<ServerState>,
    Query(q): Query<InvIdQuery>,
    Json(patch): Json<VariantPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let inv_id = q.inv_id.ok_or_else(|| ApiError::BadRequest("Missing inv_id".into()))?;
    printable_service::update_variant(&state.db, inv_id, patch).await?;
    Ok(Json(json!({ "message": "Inventory updated successfully" })))
}

pub async fn inventory_delete(
    State(state): State<ServerState>,
    Query(q): Query<InvIdQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let inv_id = q.inv_id.ok_or_else(|| ApiError::BadRequest("Missing inv_id".into()))?;
    printable_service::delete_variant(&state.db, inv_id).await?;
    Ok(Json(json!({ "message": "Inventory variant deleted" })))
}
