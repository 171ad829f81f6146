//! Supplier CRUD endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::dto::{SupplierDto, SupplierPayload};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

use stockpile_core::validation::{validate_email, validate_name, validate_rating};
use stockpile_core::Supplier;

/// `GET /api/suppliers/`
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<SupplierDto>>> {
    let suppliers = state.db.suppliers().list().await?;
    Ok(Json(suppliers.into_iter().map(SupplierDto::from).collect()))
}

/// `GET /api/suppliers/:id/`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SupplierDto>> {
    let supplier = state
        .db
        .suppliers()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Supplier not found: {}", id)))?;

    Ok(Json(SupplierDto::from(supplier)))
}

/// `POST /api/suppliers/`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<SupplierPayload>,
) -> ApiResult<(StatusCode, Json<SupplierDto>)> {
    let supplier = build_supplier(Uuid::new_v4().to_string(), body)?;

    state.db.suppliers().insert(&supplier).await?;

    Ok((StatusCode::CREATED, Json(SupplierDto::from(supplier))))
}

/// `PUT /api/suppliers/:id/`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SupplierPayload>,
) -> ApiResult<Json<SupplierDto>> {
    let existing = state
        .db
        .suppliers()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Supplier not found: {}", id)))?;

    let mut supplier = build_supplier(id, body)?;
    supplier.created_at = existing.created_at;

    state.db.suppliers().update(&supplier).await?;

    let stored = state
        .db
        .suppliers()
        .get_by_id(&supplier.id)
        .await?
        .ok_or_else(|| ApiError::Internal("Updated supplier vanished".to_string()))?;

    Ok(Json(SupplierDto::from(stored)))
}

/// `DELETE /api/suppliers/:id/` — items referencing the supplier are
/// detached, not deleted.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<StatusCode> {
    state.db.suppliers().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn build_supplier(id: String, body: SupplierPayload) -> ApiResult<Supplier> {
    validate_name(&body.name)?;
    validate_email(&body.email)?;
    validate_rating(body.rating)?;

    let now = Utc::now();
    Ok(Supplier {
        id,
        name: body.name,
        contact_person: body.contact_person,
        email: body.email,
        phone: body.phone,
        category: body.category,
        rating: body.rating,
        status: body.status,
        location: body.location,
        created_at: now,
        updated_at: now,
    })
}
