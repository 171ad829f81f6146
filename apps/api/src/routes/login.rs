//! Login endpoint.

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::{LoginRequest, TokenPairDto};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

use stockpile_db::repository::user::verify_password;

/// `POST /api/login/` — verifies credentials and issues an
/// access/refresh token pair.
///
/// The same 401 is returned for an unknown username and a wrong
/// password, so the endpoint does not leak which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<TokenPairDto>> {
    let user = state
        .db
        .users()
        .get_by_username(&body.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    if !verify_password(&body.password, &user.password_hash) {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let access = state.jwt.generate_access_token(&user.id, &user.username)?;
    let refresh = state.jwt.generate_refresh_token(&user.id, &user.username)?;

    info!(username = %user.username, "User logged in");

    Ok(Json(TokenPairDto { access, refresh }))
}
