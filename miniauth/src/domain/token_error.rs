use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Every way issuing, decoding or refreshing a token can fail.
///
/// All variants are terminal: the same inputs always produce the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid claims")]
    InvalidClaims,

    #[error("invalid signing method")]
    InvalidSigningMethod,

    #[error("invalid key")]
    InvalidKey,

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("malformed authorization header")]
    MalformedHeader,

    #[error("malformed token")]
    MalformedToken,

    #[error("signature is invalid")]
    SignatureInvalid,

    #[error("token is expired")]
    TokenExpired,

    #[error("token is not valid yet")]
    TokenNotYetValid,

    #[error("unexpected token error: {0}")]
    Internal(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            ErrorKind::ImmatureSignature => Self::TokenNotYetValid,
            ErrorKind::InvalidSignature => Self::SignatureInvalid,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => Self::MalformedToken,
            ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm => Self::UnsupportedAlgorithm(err.to_string()),
            ErrorKind::InvalidKeyFormat => Self::InvalidKey,
            _ => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_jsonwebtoken_kinds() {
        let expired = jsonwebtoken::errors::Error::from(ErrorKind::ExpiredSignature);
        assert_eq!(TokenError::from(expired), TokenError::TokenExpired);

        let bad_sig = jsonwebtoken::errors::Error::from(ErrorKind::InvalidSignature);
        assert_eq!(TokenError::from(bad_sig), TokenError::SignatureInvalid);

        let bad_shape = jsonwebtoken::errors::Error::from(ErrorKind::InvalidToken);
        assert_eq!(TokenError::from(bad_shape), TokenError::MalformedToken);
    }
}
