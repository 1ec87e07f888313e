use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// One kie.ai response, read in full.
///
/// `json` is only for diagnostics; the caller always gets `body_text` back
/// untouched.
#[derive(Debug, Clone)]
pub struct KieResult {
    pub status: StatusCode,
    pub body_text: String,
    pub json: Option<Value>,
    pub ok: bool,
}

impl KieResult {
    pub fn new(status: StatusCode, body_text: String) -> Self {
        let json = match body_text.is_empty() {
            true => None,
            false => serde_json::from_str(&body_text).ok(),
        };

        Self {
            status,
            json,
            ok: status.is_success(),
            body_text,
        }
    }

    pub fn is_retryable(&self) -> bool {
        is_retryable_kie_error(self.status, &self.body_text)
    }

    /// The `code` and `msg` fields kie.ai puts in its JSON envelopes.
    pub fn summary(&self) -> (Option<&Value>, Option<&str>) {
        match &self.json {
            Some(json) => (json.get("code"), json.get("msg").and_then(Value::as_str)),
            None => (None, None),
        }
    }
}

pub fn is_retryable_kie_error(status: StatusCode, body_text: &str) -> bool {
    if status != StatusCode::INTERNAL_SERVER_ERROR {
        return false;
    }

    let lower = body_text.to_lowercase();
    lower.contains("internal error") && lower.contains("try again later")
}

impl IntoResponse for KieResult {
    fn into_response(self) -> Response {
        (
            self.status,
            [(CONTENT_TYPE, mime::APPLICATION_JSON.to_string())],
            self.body_text,
        )
            .into_response()
    }
}
