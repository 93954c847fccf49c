pub mod env {
    pub const TOKEN_KEY_ENV_VAR: &str = "DefaultTokenKey";
    pub const SIGNING_METHOD_ENV_VAR: &str = "DefaultSigningMethod";
    pub const AUTHORIZATION_HEADER_ENV_VAR: &str = "AuthorizationHeaderKey";
    pub const TOKEN_TTL_SECONDS_ENV_VAR: &str = "ExpirationTime";
    pub const REFRESH_THRESHOLD_SECONDS_ENV_VAR: &str = "RefreshThreshold";
}

pub const DEFAULT_SIGNING_METHOD: &str = "HS512";
pub const DEFAULT_AUTHORIZATION_HEADER: &str = "Authorization";
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60 * 24;
pub const DEFAULT_REFRESH_THRESHOLD_SECONDS: i64 = 60 * 60;

// Size of the random fallback key, before base64url encoding.
pub const FALLBACK_KEY_BYTES: usize = 64;
