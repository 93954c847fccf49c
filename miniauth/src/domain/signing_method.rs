use std::fmt;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

use super::TokenError;

/// HMAC-SHA family a token may be signed with.
///
/// Names are matched exactly (`"HS512"`, not `"hs512"`). Anything outside
/// the family, `"none"` included, is refused rather than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningMethod {
    HS256,
    HS384,
    HS512,
}

impl SigningMethod {
    pub fn parse(name: &str) -> Result<Self, TokenError> {
        if name.is_empty() {
            return Err(TokenError::InvalidSigningMethod);
        }
        match name {
            "HS256" => Ok(Self::HS256),
            "HS384" => Ok(Self::HS384),
            "HS512" => Ok(Self::HS512),
            other => Err(TokenError::UnsupportedAlgorithm(other.to_owned())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::HS256 => Algorithm::HS256,
            Self::HS384 => Algorithm::HS384,
            Self::HS512 => Algorithm::HS512,
        }
    }
}

impl Default for SigningMethod {
    fn default() -> Self {
        Self::HS512
    }
}

impl FromStr for SigningMethod {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Algorithm> for SigningMethod {
    type Error = TokenError;

    fn try_from(alg: Algorithm) -> Result<Self, Self::Error> {
        match alg {
            Algorithm::HS256 => Ok(Self::HS256),
            Algorithm::HS384 => Ok(Self::HS384),
            Algorithm::HS512 => Ok(Self::HS512),
            other => Err(TokenError::UnsupportedAlgorithm(format!("{other:?}"))),
        }
    }
}

impl fmt::Display for SigningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method and secret used for a single sign or verify call.
#[derive(Clone)]
pub struct SigningContext {
    pub method: SigningMethod,
    pub key: Vec<u8>,
}

impl SigningContext {
    /// Resolve a method name and key. The key must not be empty.
    pub fn new(method: &str, key: impl Into<Vec<u8>>) -> Result<Self, TokenError> {
        let method = SigningMethod::parse(method)?;
        let key = key.into();
        if key.is_empty() {
            return Err(TokenError::InvalidKey);
        }
        Ok(Self { method, key })
    }
}

// Keep key bytes out of logs.
impl fmt::Debug for SigningContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningContext")
            .field("method", &self.method)
            .field("key", &format_args!("<{} bytes>", self.key.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_methods() {
        assert_eq!(SigningMethod::parse("HS256"), Ok(SigningMethod::HS256));
        assert_eq!(SigningMethod::parse("HS384"), Ok(SigningMethod::HS384));
        assert_eq!("HS512".parse::<SigningMethod>(), Ok(SigningMethod::HS512));
    }

    #[test]
    fn test_parse_rejects_empty_and_unknown() {
        assert_eq!(
            SigningMethod::parse(""),
            Err(TokenError::InvalidSigningMethod)
        );
        assert!(matches!(
            SigningMethod::parse("none"),
            Err(TokenError::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            SigningMethod::parse("RS256"),
            Err(TokenError::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            SigningMethod::parse("hs512"),
            Err(TokenError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_asymmetric_algorithms_are_unsupported() {
        assert!(SigningMethod::try_from(Algorithm::RS256).is_err());
        assert_eq!(
            SigningMethod::try_from(Algorithm::HS384),
            Ok(SigningMethod::HS384)
        );
    }

    #[test]
    fn test_signing_context_requires_key() {
        assert_eq!(
            SigningContext::new("HS256", Vec::new()).unwrap_err(),
            TokenError::InvalidKey
        );
        let ctx = SigningContext::new("HS256", "secret").unwrap();
        assert_eq!(ctx.method, SigningMethod::HS256);
        assert!(!format!("{ctx:?}").contains("secret"));
    }
}
