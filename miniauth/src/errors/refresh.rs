use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::TokenError;

#[derive(Error, Debug)]
pub enum RefreshTokenError {
    #[error("Token not provided")]
    MissingToken,

    #[error("Malformed authorization header")]
    MalformedHeader,

    #[error("Invalid token provided")]
    InvalidToken,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl From<TokenError> for RefreshTokenError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MalformedHeader => Self::MalformedHeader,
            TokenError::MalformedToken
            | TokenError::SignatureInvalid
            | TokenError::TokenExpired
            | TokenError::TokenNotYetValid
            | TokenError::UnsupportedAlgorithm(_) => Self::InvalidToken,
            TokenError::InvalidClaims
            | TokenError::InvalidSigningMethod
            | TokenError::InvalidKey
            | TokenError::Internal(_) => Self::InternalServerError,
        }
    }
}

impl IntoResponse for RefreshTokenError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RefreshTokenError::MissingToken | RefreshTokenError::MalformedHeader => {
                StatusCode::BAD_REQUEST
            }
            RefreshTokenError::InvalidToken => StatusCode::UNAUTHORIZED,
            RefreshTokenError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
