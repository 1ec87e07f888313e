use serde_json::{Map, Value};

use crate::{app::models::api_error::ApiError, tasks::errors::TasksApiError};

/// Inbound task creation request after shape validation.
///
/// Input fields stay as raw JSON: an absent key is `None`, an explicit `null`
/// is `Some(Value::Null)` and is forwarded upstream as such.
#[derive(Debug, Clone)]
pub struct CreateTaskDto {
    pub model: String,
    pub input: TaskInputDto,
}

#[derive(Debug, Clone, Default)]
pub struct TaskInputDto {
    pub prompt: Option<Value>,
    pub image_url: Option<Value>,
    pub resolution: Option<Value>,
    pub duration: Option<Value>,
}

impl CreateTaskDto {
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        let Value::Object(mut body) = body else {
            tracing::warn!("rejected non-object body");
            return Err(TasksApiError::BodyNotObject.value());
        };

        let model = match body.remove("model") {
            Some(Value::String(model)) if !model.is_empty() => model,
            _ => {
                tracing::warn!("rejected body with missing or invalid model");
                return Err(TasksApiError::InvalidModelOrInput.value());
            }
        };

        let Some(Value::Object(input)) = body.remove("input") else {
            tracing::warn!("rejected body with missing or invalid input");
            return Err(TasksApiError::InvalidModelOrInput.value());
        };

        Ok(Self {
            model,
            input: TaskInputDto::from_map(input),
        })
    }
}

impl TaskInputDto {
    fn from_map(mut input: Map<String, Value>) -> Self {
        Self {
            prompt: input.remove("prompt"),
            image_url: input.remove("image_url"),
            resolution: input.remove("resolution"),
            duration: input.remove("duration"),
        }
    }
}
