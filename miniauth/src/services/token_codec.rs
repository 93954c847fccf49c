//! Signing and verification of bearer tokens.
//!
//! Tokens use the compact JWS layout `header.payload.signature`, each part
//! base64url encoded, signed with one of the HMAC-SHA algorithms in
//! [`SigningMethod`]. Every entry point that accepts a token expects the
//! full authorization header value (`"Bearer <token>"`).
use std::collections::HashSet;

use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64_URL;
use base64::Engine;
use chrono::Utc;
use jsonwebtoken::{decode_header, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{strip_bearer, Claims, SigningMethod, TokenError};

/// Issue a token for `claims`, signed with `key` under the named method.
///
/// Fails with `InvalidClaims` for an empty payload, `InvalidSigningMethod`
/// for an empty method name, `UnsupportedAlgorithm` for a method outside the
/// HMAC family and `InvalidKey` for an empty key.
pub fn generate(method: &str, claims: &Claims, key: &[u8]) -> Result<String, TokenError> {
    if claims.is_empty() {
        return Err(TokenError::InvalidClaims);
    }
    let method = SigningMethod::parse(method)?;
    if key.is_empty() {
        return Err(TokenError::InvalidKey);
    }
    sign(&Header::new(method.algorithm()), claims, key)
}

// Sign with an explicit header so a reissued token keeps the original one.
pub(crate) fn sign<T: Serialize>(
    header: &Header,
    claims: &T,
    key: &[u8],
) -> Result<String, TokenError> {
    jsonwebtoken::encode(header, claims, &EncodingKey::from_secret(key)).map_err(TokenError::from)
}

/// Decode and verify a `"Bearer <token>"` header value into [`Claims`].
pub fn decode(header_value: &str, key: &[u8]) -> Result<Claims, TokenError> {
    decode_into(header_value, key)
}

/// Decode and verify a `"Bearer <token>"` header value into any claims type.
pub fn decode_into<T: DeserializeOwned>(header_value: &str, key: &[u8]) -> Result<T, TokenError> {
    let token = strip_bearer(header_value)?;
    decode_token(token, key).map(|data| data.claims)
}

/// Returns `true` only when the token decodes, verifies and is unexpired.
///
/// The reason for a rejection is dropped; use [`decode`] when it matters.
pub fn is_valid(header_value: &str, key: &[u8]) -> bool {
    decode(header_value, key).is_ok()
}

/// Verify a bare token (no scheme prefix) and return its header with the
/// claims, so callers can re-sign under the same algorithm.
pub(crate) fn decode_token<T: DeserializeOwned>(
    token: &str,
    key: &[u8],
) -> Result<TokenData<T>, TokenError> {
    if key.is_empty() {
        return Err(TokenError::InvalidKey);
    }

    let result = header_method(token)
        .and_then(|method| {
            jsonwebtoken::decode::<Value>(
                token,
                &DecodingKey::from_secret(key),
                &validation_for(method),
            )
            .map_err(TokenError::from)
        })
        .and_then(|data| {
            check_time_claims(&data.claims, Utc::now().timestamp())?;
            let claims =
                serde_json::from_value::<T>(data.claims).map_err(|_| TokenError::MalformedToken)?;
            Ok(TokenData {
                header: data.header,
                claims,
            })
        });

    if let Err(err) = &result {
        log::debug!("error parsing token ->> {err}");
    }
    result
}

fn header_method(token: &str) -> Result<SigningMethod, TokenError> {
    match decode_header(token) {
        Ok(header) => SigningMethod::try_from(header.alg),
        Err(err) => match raw_algorithm(token) {
            Some(alg) if SigningMethod::parse(&alg).is_err() => {
                Err(TokenError::UnsupportedAlgorithm(alg))
            }
            _ => Err(err.into()),
        },
    }
}

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

// jsonwebtoken refuses to parse a header naming an algorithm it does not
// know (`none` included), so read the name from the first segment directly.
fn raw_algorithm(token: &str) -> Option<String> {
    let segment = token.split('.').next()?;
    let bytes = B64_URL.decode(segment).ok()?;
    serde_json::from_slice::<RawHeader>(&bytes)
        .ok()
        .map(|header| header.alg)
}

// jsonwebtoken parses `exp` and `nbf` as u64 and skips the check when that
// fails, so negative or fractional timestamps are validated here.
fn check_time_claims(payload: &Value, now: i64) -> Result<(), TokenError> {
    if let Some(exp) = timestamp_claim(payload, "exp")? {
        if exp < now {
            return Err(TokenError::TokenExpired);
        }
    }
    if let Some(nbf) = timestamp_claim(payload, "nbf")? {
        if nbf > now {
            return Err(TokenError::TokenNotYetValid);
        }
    }
    Ok(())
}

fn timestamp_claim(payload: &Value, name: &str) -> Result<Option<i64>, TokenError> {
    match payload.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or(TokenError::MalformedToken),
    }
}

// Expiry is checked with no leeway and only when the claim is present.
fn validation_for(method: SigningMethod) -> Validation {
    let mut validation = Validation::new(method.algorithm());
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();
    validation
}
