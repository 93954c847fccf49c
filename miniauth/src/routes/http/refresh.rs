use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::{app_state::AppState, domain::RefreshResponse, errors::RefreshTokenError};

/// Exchange a near-expiry token for a fresh one. Tokens with plenty of
/// lifetime left come back unchanged.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>, RefreshTokenError> {
    let header_value = headers
        .get(state.config.authorization_header())
        .ok_or(RefreshTokenError::MissingToken)?
        .to_str()
        .map_err(|_| RefreshTokenError::MalformedHeader)?;

    let token = state.token_service.refresh(header_value)?;

    Ok(Json(RefreshResponse { token }))
}
