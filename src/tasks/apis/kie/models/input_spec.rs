use serde::Serialize;
use serde_json::Value;

use crate::tasks::enums::task_family::TaskFamily;

/// Body sent to kie.ai, shaped per task family.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum InputSpec {
    Jobs(JobsInputSpec),
    Runway(RunwayInputSpec),
}

impl InputSpec {
    pub fn family(&self) -> TaskFamily {
        match self {
            Self::Jobs(_) => TaskFamily::Default,
            Self::Runway(_) => TaskFamily::Runway,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobsInputSpec {
    pub model: String,
    pub input: JobsInput,
}

#[derive(Debug, Serialize)]
pub struct JobsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunwayInputSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Value>,
    pub model: String,
    pub quality: Value,
    pub duration: i64,
}
