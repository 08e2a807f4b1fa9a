use axum::extract::State;

use crate::error::Result;
use crate::extractors::Json;
use crate::models::{LoginRequest, TokenResponse};
use crate::state::AppState;

/// Exchange a username/password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let token = state
        .credentials
        .authenticate(&input.username, &input.password)
        .inspect_err(|_| tracing::warn!("Failed login attempt for {}", input.username))?;

    tracing::info!("Issued session token for {}", input.username);

    Ok(Json(TokenResponse::bearer(token)))
}
