/// Default-flavoured token operations.
///
/// `TokenService` pairs the stateless codec and refresh functions with a
/// [`ConfigProvider`], so call sites that only hold a header value do not
/// have to thread the signing method and key through themselves.
///
/// Each call asks the provider for the current signing context once and
/// delegates:
/// - `generate` -> `token_codec::generate`
/// - `decode` / `decode_into` / `is_valid` -> `token_codec`
/// - `refresh` -> `refresh::refresh_with` using the provider's policy
///
/// Concurrency:
/// - No mutable state; the provider sits behind an `Arc` and clones are
///   cheap, so one service can be shared by every request handler.
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::{Claims, TokenError};
use crate::services::{refresh, token_codec};
use crate::utils::config::ConfigProvider;

#[derive(Clone)]
pub struct TokenService {
    provider: Arc<dyn ConfigProvider>,
}

impl TokenService {
    pub fn new(provider: Arc<dyn ConfigProvider>) -> Self {
        Self { provider }
    }

    /// Claims stamped with `iat = now` and `exp = now + configured lifetime`.
    pub fn claims_template(&self) -> Claims {
        Claims::issued_now(self.provider.expiry_policy().lifetime)
    }

    /// Issue a token with the configured method and key.
    pub fn generate(&self, claims: &Claims) -> Result<String, TokenError> {
        // Checked here too so empty claims win over a missing provider key.
        if claims.is_empty() {
            return Err(TokenError::InvalidClaims);
        }
        let ctx = self.provider.signing_context()?;
        token_codec::generate(ctx.method.as_str(), claims, &ctx.key)
    }

    pub fn decode(&self, header_value: &str) -> Result<Claims, TokenError> {
        let ctx = self.provider.signing_context()?;
        token_codec::decode(header_value, &ctx.key)
    }

    pub fn decode_into<T: DeserializeOwned>(&self, header_value: &str) -> Result<T, TokenError> {
        let ctx = self.provider.signing_context()?;
        token_codec::decode_into(header_value, &ctx.key)
    }

    /// `false` for any rejection, including a provider without a key.
    pub fn is_valid(&self, header_value: &str) -> bool {
        match self.provider.signing_context() {
            Ok(ctx) => token_codec::is_valid(header_value, &ctx.key),
            Err(err) => {
                log::debug!("{err}");
                false
            }
        }
    }

    pub fn refresh(&self, header_value: &str) -> Result<String, TokenError> {
        let ctx = self.provider.signing_context()?;
        refresh::refresh_with(header_value, &ctx.key, &self.provider.expiry_policy())
    }
}
