use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TasksApiError {
    BodyNotObject,
    InvalidModelOrInput,
    InvalidRunwayDuration,
}

impl TasksApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::BodyNotObject => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Body must be a JSON object".to_string(),
            },
            Self::InvalidModelOrInput => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Missing or invalid \"model\" or \"input\" in body".to_string(),
            },
            Self::InvalidRunwayDuration => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid duration for Runway model. Allowed values: 5, 8, 10".to_string(),
            },
        }
    }
}
