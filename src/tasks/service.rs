use serde_json::Value;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::kie::{self, structs::kie_result::KieResult},
    dtos::create_task_dto::CreateTaskDto,
};

pub async fn create_task(
    body: Value,
    api_key: &str,
    state: &AppState,
) -> Result<KieResult, ApiError> {
    let dto = CreateTaskDto::from_body(body)?;
    let input_spec = kie::service::provide_input_spec(&dto)?;

    tracing::info!(
        "create_task model={} family={}",
        dto.model,
        input_spec.family()
    );

    kie::service::create_task_with_retry(&input_spec, api_key, &state.client, &state.kie_config)
        .await
}
