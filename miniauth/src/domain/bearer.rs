use super::TokenError;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Strip the `"Bearer "` scheme from an authorization header value.
///
/// The prefix is required and case-sensitive. A bare token, or anything
/// shorter than the prefix, is rejected instead of being sliced blindly.
pub fn strip_bearer(header_value: &str) -> Result<&str, TokenError> {
    match header_value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(TokenError::MalformedHeader),
    }
}

/// Format a token as an authorization header value.
pub fn bearer(token: &str) -> String {
    format!("{BEARER_PREFIX}{token}")
}
