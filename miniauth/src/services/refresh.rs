//! Conditional reissue of tokens that are close to expiry.
//!
//! A token is either handed back untouched or re-signed in full with a fresh
//! expiry. The algorithm for the new signature is read from the token's own
//! header, so callers only need the key.
use chrono::{Duration, Utc};

use crate::domain::{strip_bearer, Claims, TokenError};
use crate::services::token_codec::{decode_token, sign};
use crate::utils::consts::{DEFAULT_REFRESH_THRESHOLD_SECONDS, DEFAULT_TOKEN_TTL_SECONDS};

/// Outcome of looking at a token's remaining lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    /// Enough lifetime left; return the token as is.
    Keep,
    /// Reissue with `exp` set to this unix timestamp.
    Reissue { expires_at: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    /// Tokens with more remaining lifetime than this are passed through.
    pub threshold: Duration,
    /// Lifetime given to a reissued token.
    pub lifetime: Duration,
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self {
            threshold: Duration::seconds(DEFAULT_REFRESH_THRESHOLD_SECONDS),
            lifetime: Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS),
        }
    }
}

impl ExpiryPolicy {
    pub fn new(threshold: Duration, lifetime: Duration) -> Self {
        Self {
            threshold,
            lifetime,
        }
    }

    /// Decide against the current wall clock.
    pub fn decide(&self, claims: &Claims) -> RefreshDecision {
        self.decide_at(claims, Utc::now().timestamp())
    }

    /// Decide as of `now` (unix seconds). A token without `exp` never
    /// expires and is always kept.
    pub fn decide_at(&self, claims: &Claims, now: i64) -> RefreshDecision {
        match claims.exp {
            Some(exp) if exp.saturating_sub(now) <= self.threshold.num_seconds() => {
                RefreshDecision::Reissue {
                    expires_at: now.saturating_add(self.lifetime.num_seconds()),
                }
            }
            _ => RefreshDecision::Keep,
        }
    }
}

/// Refresh a `"Bearer <token>"` header value with the default policy.
pub fn refresh(header_value: &str, key: &[u8]) -> Result<String, TokenError> {
    refresh_with(header_value, key, &ExpiryPolicy::default())
}

/// Refresh a `"Bearer <token>"` header value.
///
/// Returns the bare input token when it has more than `policy.threshold`
/// left, otherwise a new token with every claim preserved except `exp`.
/// Decode failures, including `TokenExpired`, are returned unchanged.
pub fn refresh_with(
    header_value: &str,
    key: &[u8],
    policy: &ExpiryPolicy,
) -> Result<String, TokenError> {
    let token = strip_bearer(header_value)?;
    let data = decode_token::<Claims>(token, key)?;

    match policy.decide(&data.claims) {
        RefreshDecision::Keep => Ok(token.to_owned()),
        RefreshDecision::Reissue { expires_at } => {
            let claims = data.claims.expires_at(expires_at);
            let reissued = sign(&data.header, &claims, key)?;
            log::info!(
                "reissued {:?} token for subject {:?}, expires at {}",
                data.header.alg,
                claims.sub,
                expires_at
            );
            Ok(reissued)
        }
    }
}
