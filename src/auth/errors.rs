use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AuthApiError {
    InvalidAuthorization,
}

impl AuthApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidAuthorization => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Missing or invalid Authorization header. Use: Bearer <your-kie-api-key>"
                    .to_string(),
            },
        }
    }
}
