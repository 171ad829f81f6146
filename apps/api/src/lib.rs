//! # Stockpile API
//!
//! HTTP JSON API for the Stockpile inventory/sales backend.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Stockpile API Server                         │
//! │                                                                     │
//! │  HTTP client ──► axum router ──► auth middleware (JWT bearer)       │
//! │                      │                                              │
//! │                      ▼                                              │
//! │                  handlers (routes/) ──► dto.rs mapping              │
//! │                      │                                              │
//! │                      ▼                                              │
//! │                  stockpile-db repositories ──► SQLite               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The router is built by [`build_router`] so integration tests can
//! serve the exact production route table on an ephemeral port.

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

use crate::auth::JwtManager;
use crate::config::ApiConfig;
use stockpile_db::Database;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub jwt: Arc<JwtManager>,
}

impl AppState {
    pub fn new(db: Database, config: &ApiConfig) -> Self {
        AppState {
            db,
            jwt: Arc::new(JwtManager::new(
                config.jwt_secret.clone(),
                config.jwt_access_lifetime_secs,
                config.jwt_refresh_lifetime_secs,
            )),
        }
    }
}

/// Builds the full application router.
///
/// `/health` and `/api/login/` are public; everything else under
/// `/api` requires a bearer access token.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/inventory/items/",
            get(routes::items::list).post(routes::items::create),
        )
        .route(
            "/inventory/items/:id/",
            get(routes::items::get)
                .put(routes::items::update)
                .delete(routes::items::delete),
        )
        .route(
            "/suppliers/",
            get(routes::suppliers::list).post(routes::suppliers::create),
        )
        .route(
            "/suppliers/:id/",
            get(routes::suppliers::get)
                .put(routes::suppliers::update)
                .delete(routes::suppliers::delete),
        )
        .route(
            "/sales/",
            get(routes::sales::list).post(routes::sales::create),
        )
        .route("/sales/daily_summary/", get(routes::sales::daily_summary))
        .route("/reports/dashboard-stats/", get(routes::reports::dashboard_stats))
        .route("/reports/sales-report/", get(routes::reports::sales_report))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    let api = Router::new()
        .route("/login/", post(routes::login::login))
        .merge(protected);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(ServiceBuilder::new())
        .with_state(state)
}

/// Unauthenticated liveness probe.
async fn health() -> StatusCode {
    StatusCode::OK
}
