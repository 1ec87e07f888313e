use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use regex::Regex;

use crate::{app::models::api_error::ApiError, auth::errors::AuthApiError};

lazy_static! {
    static ref BEARER_REGEX: Regex = Regex::new(r"(?i)^Bearer\s+(.+)$").unwrap();
}

/// The caller's kie.ai API key, taken from `Authorization: Bearer <key>`.
///
/// The scheme is matched case-insensitively. The key is forwarded upstream
/// as-is and never stored.
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn parse(header: &str) -> Option<Self> {
        let captures = BEARER_REGEX.captures(header)?;
        let token = captures.get(1)?.as_str().trim();

        if token.is_empty() {
            return None;
        }

        Some(Self(token.to_string()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            tracing::warn!("rejected request without authorization header");
            return Err(AuthApiError::InvalidAuthorization.value());
        };

        let Ok(header) = header.to_str() else {
            tracing::warn!("rejected request with non-ascii authorization header");
            return Err(AuthApiError::InvalidAuthorization.value());
        };

        match Self::parse(header) {
            Some(token) => Ok(token),
            None => {
                tracing::warn!("rejected request with malformed authorization header");
                Err(AuthApiError::InvalidAuthorization.value())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BearerToken;

    fn token(header: &str) -> Option<String> {
        BearerToken::parse(header).map(|t| t.0)
    }

    #[test]
    fn accepts_bearer_scheme_in_any_case() {
        assert_eq!(token("Bearer abc123"), Some("abc123".to_string()));
        assert_eq!(token("bearer abc123"), Some("abc123".to_string()));
        assert_eq!(token("BEARER\tabc123"), Some("abc123".to_string()));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(token("Bearer    abc123   "), Some("abc123".to_string()));
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(token("Token abc123"), None);
        assert_eq!(token("abc123"), None);
    }

    #[test]
    fn rejects_missing_or_blank_token() {
        assert_eq!(token("Bearer"), None);
        assert_eq!(token("Bearer "), None);
        assert_eq!(token("Bearer     "), None);
        assert_eq!(token(""), None);
    }
}
