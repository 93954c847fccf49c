use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Rejection produced by the token filter. Missing and invalid tokens get
/// the same response.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("invalid token")]
    InvalidToken,
}

impl IntoResponse for FilterError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::FORBIDDEN, self.to_string()).into_response()
    }
}
