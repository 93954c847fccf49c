use std::env;

use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64_URL;
use base64::Engine;
use chrono::{Duration, Utc};
use dotenvy::dotenv;
use rand::RngCore;
use thiserror::Error;

use super::consts::{
    env as vars, DEFAULT_AUTHORIZATION_HEADER, DEFAULT_REFRESH_THRESHOLD_SECONDS,
    DEFAULT_SIGNING_METHOD, DEFAULT_TOKEN_TTL_SECONDS, FALLBACK_KEY_BYTES,
};
use crate::domain::{SigningContext, SigningMethod, TokenError};
use crate::services::ExpiryPolicy;

/// Supplies the signing context and expiry policy used by the
/// default-flavoured entry points on `TokenService`.
pub trait ConfigProvider: Send + Sync {
    fn signing_context(&self) -> Result<SigningContext, TokenError>;
    fn expiry_policy(&self) -> ExpiryPolicy;
}

#[derive(Clone)]
pub struct Config {
    signing_method: SigningMethod,
    token_key: Vec<u8>,
    authorization_header: String,
    token_ttl_seconds: i64,
    refresh_threshold_seconds: i64,
}

impl Config {
    /// Explicit configuration with default lifetimes and header name.
    pub fn new(signing_method: SigningMethod, token_key: impl Into<Vec<u8>>) -> Self {
        Self {
            signing_method,
            token_key: token_key.into(),
            authorization_header: DEFAULT_AUTHORIZATION_HEADER.to_owned(),
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
            refresh_threshold_seconds: DEFAULT_REFRESH_THRESHOLD_SECONDS,
        }
    }

    pub fn with_authorization_header(mut self, header: impl Into<String>) -> Self {
        self.authorization_header = header.into();
        self
    }

    pub fn with_token_ttl_seconds(mut self, seconds: i64) -> Self {
        self.token_ttl_seconds = seconds;
        self
    }

    pub fn with_refresh_threshold_seconds(mut self, seconds: i64) -> Self {
        self.refresh_threshold_seconds = seconds;
        self
    }

    pub fn signing_method(&self) -> SigningMethod {
        self.signing_method
    }
    pub fn token_key(&self) -> &[u8] {
        &self.token_key
    }
    pub fn authorization_header(&self) -> &str {
        &self.authorization_header
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }
    pub fn refresh_threshold_seconds(&self) -> i64 {
        self.refresh_threshold_seconds
    }

    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from any variable source. Unset or empty variables fall back to
    /// defaults; a missing key is replaced by random key material.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token_key = match var(vars::TOKEN_KEY_ENV_VAR) {
            Some(key) => key.into_bytes(),
            None => {
                log::warn!(
                    "{} not set, signing with a random key; tokens will not survive a restart",
                    vars::TOKEN_KEY_ENV_VAR
                );
                random_key()
            }
        };

        let method_name =
            var(vars::SIGNING_METHOD_ENV_VAR).unwrap_or_else(|| DEFAULT_SIGNING_METHOD.into());
        let signing_method = SigningMethod::parse(method_name.trim())
            .map_err(|_| ConfigError::UnsupportedMethod(method_name.clone()))?;

        let authorization_header = var(vars::AUTHORIZATION_HEADER_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_AUTHORIZATION_HEADER.into());

        let token_ttl_seconds = parse_seconds(
            var(vars::TOKEN_TTL_SECONDS_ENV_VAR),
            vars::TOKEN_TTL_SECONDS_ENV_VAR,
            DEFAULT_TOKEN_TTL_SECONDS,
        )?;
        let refresh_threshold_seconds = parse_seconds(
            var(vars::REFRESH_THRESHOLD_SECONDS_ENV_VAR),
            vars::REFRESH_THRESHOLD_SECONDS_ENV_VAR,
            DEFAULT_REFRESH_THRESHOLD_SECONDS,
        )?;

        Ok(Self {
            signing_method,
            token_key,
            authorization_header,
            token_ttl_seconds,
            refresh_threshold_seconds,
        })
    }
}

impl ConfigProvider for Config {
    fn signing_context(&self) -> Result<SigningContext, TokenError> {
        if self.token_key.is_empty() {
            return Err(TokenError::InvalidKey);
        }
        Ok(SigningContext {
            method: self.signing_method,
            key: self.token_key.clone(),
        })
    }

    fn expiry_policy(&self) -> ExpiryPolicy {
        ExpiryPolicy::new(
            seconds_or_max(self.refresh_threshold_seconds),
            seconds_or_max(self.token_ttl_seconds),
        )
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("unsupported signing method {0}")]
    UnsupportedMethod(String),
}

fn parse_seconds(
    raw: Option<String>,
    key: &'static str,
    default: i64,
) -> Result<i64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => match v.trim().parse::<i64>() {
            Ok(seconds) if seconds > 0 && fits_clock(seconds) => Ok(seconds),
            _ => Err(ConfigError::Invalid(key)),
        },
    }
}

// The value must be a valid duration that can still be added to "now".
fn fits_clock(seconds: i64) -> bool {
    Duration::try_seconds(seconds)
        .and_then(|delta| Utc::now().checked_add_signed(delta))
        .is_some()
}

// Builder-supplied values skip load-time checks.
fn seconds_or_max(seconds: i64) -> Duration {
    Duration::try_seconds(seconds).unwrap_or(Duration::MAX)
}

// Random bytes rendered as base64url text, so the key stays printable.
fn random_key() -> Vec<u8> {
    let mut bytes = [0u8; FALLBACK_KEY_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    B64_URL.encode(bytes).into_bytes()
}
