//! Inventory item CRUD endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::dto::{price_to_cents, ItemDto, ItemPayload};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

use stockpile_core::validation::{validate_name, validate_price_cents, validate_sku};
use stockpile_core::{InventoryItem, ItemCategory, StockStatus};
use stockpile_db::ItemQuery;

/// Query string accepted by the item listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

/// `GET /api/inventory/items/` — filtered listing.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<ItemDto>>> {
    let mut query = ItemQuery::default();

    if let Some(search) = params.search {
        query = query.search(search);
    }
    if let Some(status) = params.status {
        query = query.status(status.parse::<StockStatus>()?);
    }
    if let Some(category) = params.category {
        query = query.category(category.parse::<ItemCategory>()?);
    }

    let items = state.db.items().list(&query).await?;
    Ok(Json(items.into_iter().map(ItemDto::from).collect()))
}

/// `GET /api/inventory/items/:id/`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ItemDto>> {
    let item = state
        .db
        .items()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Inventory item not found: {}", id)))?;

    Ok(Json(ItemDto::from(item)))
}

/// `POST /api/inventory/items/`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ItemPayload>,
) -> ApiResult<(StatusCode, Json<ItemDto>)> {
    let item = build_item(Uuid::new_v4().to_string(), body)?;

    state.db.items().insert(&item).await?;

    Ok((StatusCode::CREATED, Json(ItemDto::from(item))))
}

/// `PUT /api/inventory/items/:id/`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ItemPayload>,
) -> ApiResult<Json<ItemDto>> {
    // Load first so created_at survives the replace.
    let existing = state
        .db
        .items()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Inventory item not found: {}", id)))?;

    let mut item = build_item(id, body)?;
    item.created_at = existing.created_at;

    state.db.items().update(&item).await?;

    // Re-read for the repository-stamped updated_at.
    let stored = state
        .db
        .items()
        .get_by_id(&item.id)
        .await?
        .ok_or_else(|| ApiError::Internal("Updated item vanished".to_string()))?;

    Ok(Json(ItemDto::from(stored)))
}

/// `DELETE /api/inventory/items/:id/` — the item's sales cascade away
/// with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<StatusCode> {
    state.db.items().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn build_item(id: String, body: ItemPayload) -> ApiResult<InventoryItem> {
    validate_name(&body.name)?;
    validate_sku(&body.sku)?;
    let price_cents = price_to_cents(body.price);
    validate_price_cents(price_cents, "price")?;

    let now = Utc::now();
    Ok(InventoryItem {
        id,
        name: body.name,
        sku: body.sku,
        category: body.category,
        quantity: body.quantity,
        unit: body.unit,
        min_stock_level: body.min_stock_level,
        supplier_id: body.supplier,
        price_cents,
        created_at: now,
        updated_at: now,
    })
}
