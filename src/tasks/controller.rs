use axum::extract::State;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    auth::models::bearer_token::BearerToken,
    AppState,
};

use super::{apis::kie::structs::kie_result::KieResult, service};

pub async fn create_task(
    State(state): State<AppState>,
    BearerToken(api_key): BearerToken,
    JsonFromRequest(body): JsonFromRequest,
) -> Result<KieResult, ApiError> {
    service::create_task(body, &api_key, &state).await
}
