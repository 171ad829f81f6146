//! Report endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::dto::{DashboardStatsDto, SalesReportDto};
use crate::error::ApiResult;
use crate::AppState;

use stockpile_core::ReportPeriod;

/// `GET /api/reports/dashboard-stats/` — live dashboard summary.
pub async fn dashboard_stats(State(state): State<AppState>) -> ApiResult<Json<DashboardStatsDto>> {
    let stats = state.db.reports().dashboard_stats().await?;
    Ok(Json(DashboardStatsDto::from(stats)))
}

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub period: Option<String>,
}

/// `GET /api/reports/sales-report/?period=daily|weekly|monthly`.
///
/// An omitted period defaults to daily; anything unrecognized is a
/// 400 with the fixed `{"error": "Invalid period"}` body.
pub async fn sales_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> ApiResult<Json<SalesReportDto>> {
    let period = match params.period.as_deref() {
        None => ReportPeriod::Daily,
        Some(raw) => raw.parse::<ReportPeriod>()?,
    };

    let report = state.db.reports().sales_report(period).await?;
    Ok(Json(SalesReportDto::from(report)))
}
