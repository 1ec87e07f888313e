use axum::{
    http::header::ALLOW,
    response::{IntoResponse, Response},
};

use super::errors::DefaultApiError;

pub async fn get_root() {}

pub async fn method_not_allowed() -> Response {
    (
        [(ALLOW, "POST")],
        DefaultApiError::MethodNotAllowed.value(),
    )
        .into_response()
}
