use axum::{
    async_trait,
    body::HttpBody,
    extract::FromRequest,
    http::Request,
    BoxError,
};
use bytes::Bytes;
use serde_json::Value;

use crate::app::errors::DefaultApiError;

use super::api_error::ApiError;

/// Request body parsed as loose JSON, regardless of the request's `Content-Type`.
///
/// An empty body yields `Value::Null`. A body that is itself a JSON string is
/// parsed a second time, so double-encoded payloads are accepted.
pub struct JsonFromRequest(pub Value);

#[async_trait]
impl<S, B> FromRequest<S, B> for JsonFromRequest
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("failed to read request body: {}", e);
                return Err(ApiError {
                    code: e.status(),
                    message: e.body_text(),
                });
            }
        };

        Ok(Self(parse_body(&bytes)?))
    }
}

pub fn parse_body(bytes: &[u8]) -> Result<Value, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::String(text)) => serde_json::from_str(&text).map_err(|e| {
            tracing::warn!("invalid double-encoded json body: {}", e);
            DefaultApiError::InvalidJsonBody.value()
        }),
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!("invalid json body: {}", e);
            Err(DefaultApiError::InvalidJsonBody.value())
        }
    }
}
