//! Sale endpoints: recording, listing, and the daily summary.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::dto::{price_to_cents, DailySummaryDto, SaleDto, SaleRequest};
use crate::error::ApiResult;
use crate::AppState;

use stockpile_core::validation::{validate_price_cents, validate_sale_quantity};

/// `POST /api/sales/` — records a sale.
///
/// Stock decrement and sale insert happen in one transaction inside
/// the repository; an unknown item id yields 404 with nothing written.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<SaleRequest>,
) -> ApiResult<(StatusCode, Json<SaleDto>)> {
    validate_sale_quantity(body.quantity)?;
    let total_price_cents = price_to_cents(body.total_price);
    validate_price_cents(total_price_cents, "total_price")?;

    let (sale, item) = state
        .db
        .sales()
        .record(&body.inventory_item, body.quantity, total_price_cents)
        .await?;

    info!(
        sale_id = %sale.id,
        sku = %item.sku,
        remaining_stock = item.quantity,
        "Sale recorded via API"
    );

    Ok((StatusCode::CREATED, Json(SaleDto::from_parts(sale, item))))
}

/// `GET /api/sales/` — all sales with nested item details, most recent
/// first.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<SaleDto>>> {
    let sales = state.db.sales().list().await?;

    Ok(Json(
        sales
            .into_iter()
            .map(|(sale, item)| SaleDto::from_parts(sale, item))
            .collect(),
    ))
}

/// `GET /api/sales/daily_summary/` — today's food/beverage quantities
/// and total revenue.
pub async fn daily_summary(State(state): State<AppState>) -> ApiResult<Json<DailySummaryDto>> {
    let summary = state.db.reports().daily_summary().await?;
    Ok(Json(DailySummaryDto::from(summary)))
}
