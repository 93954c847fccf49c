use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload carried inside a signed token.
///
/// Application data lives in a nested `Data` object; the registered claims
/// sit beside it at the top level of the payload:
///
/// ```json
/// {"Data":{"uid":"42"},"iss":"miniauth","exp":1700000000,"iat":1699913600}
/// ```
///
/// Every standard claim is optional and omitted from the payload when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "Data", default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>, // Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>, // Subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>, // Audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>, // Token ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>, // Issued at (unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>, // Expires at (unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>, // Not before (unix seconds)
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims stamped with `iat = now` and `exp = now + lifetime`.
    pub fn issued_now(lifetime: Duration) -> Self {
        let now = Utc::now();
        Self {
            iat: Some(now.timestamp()),
            exp: Some(offset_from(now, lifetime)),
            ..Self::default()
        }
    }

    /// True when neither application data nor any standard claim is set.
    /// Such a payload is rejected at issuance.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
            && self.iss.is_none()
            && self.sub.is_none()
            && self.aud.is_none()
            && self.jti.is_none()
            && self.iat.is_none()
            && self.exp.is_none()
            && self.nbf.is_none()
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.iss = Some(issuer.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.sub = Some(subject.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.aud = Some(audience.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.jti = Some(id.into());
        self
    }

    pub fn issued_at(mut self, timestamp: i64) -> Self {
        self.iat = Some(timestamp);
        self
    }

    pub fn expires_at(mut self, timestamp: i64) -> Self {
        self.exp = Some(timestamp);
        self
    }

    /// Set `exp` relative to the current wall clock.
    pub fn expires_in(self, delta: Duration) -> Self {
        let exp = offset_from(Utc::now(), delta);
        self.expires_at(exp)
    }

    pub fn not_before(mut self, timestamp: i64) -> Self {
        self.nbf = Some(timestamp);
        self
    }

    /// Seconds until `exp`, negative once expired. `None` when the token
    /// carries no expiry.
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        self.exp.map(|exp| exp.saturating_sub(Utc::now().timestamp()))
    }
}

// Clamped to chrono's representable range instead of panicking.
fn offset_from(now: DateTime<Utc>, delta: Duration) -> i64 {
    now.checked_add_signed(delta)
        .unwrap_or(if delta < Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
        .timestamp()
}
