use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::{app_state::AppState, errors::FilterError};

/// Forward the request only when the configured authorization header holds
/// a valid bearer token; otherwise answer 403 with `invalid token`.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, FilterError> {
    let header_value = request
        .headers()
        .get(state.config.authorization_header())
        .and_then(|value| value.to_str().ok())
        .ok_or(FilterError::InvalidToken)?;

    if !state.token_service.is_valid(header_value) {
        return Err(FilterError::InvalidToken);
    }

    Ok(next.run(request).await)
}
