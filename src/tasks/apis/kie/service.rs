use tokio_retry::{strategy::FixedInterval, RetryIf};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    tasks::{
        dtos::create_task_dto::CreateTaskDto, enums::task_family::TaskFamily,
        errors::TasksApiError, util::coerce,
    },
};

use super::{
    config::{KieConfig, RUNWAY_DEFAULT_QUALITY, RUNWAY_DURATIONS},
    errors::CreateTaskError,
    models::input_spec::{InputSpec, JobsInput, JobsInputSpec, RunwayInputSpec},
    structs::kie_result::KieResult,
};

/// Sends `input_spec` to kie.ai, retrying transient 500s with a fixed delay.
///
/// Whatever the last attempt returned is handed back, success or not. Only a
/// transport failure becomes an `ApiError`.
pub async fn create_task_with_retry(
    input_spec: &InputSpec,
    api_key: &str,
    client: &reqwest::Client,
    config: &KieConfig,
) -> Result<KieResult, ApiError> {
    let url = config.url(input_spec.family());
    let max_retries = config.max_retries.max(1);
    let retry_strategy = FixedInterval::new(config.retry_delay).take((max_retries - 1) as usize);
    let mut attempt = 0;

    let result = RetryIf::start(
        retry_strategy,
        || {
            attempt += 1;
            create_task(&url, input_spec, api_key, client, attempt, max_retries)
        },
        CreateTaskError::is_retryable,
    )
    .await;

    match result {
        Ok(kie_result) | Err(CreateTaskError::Rejected(kie_result)) => {
            tracing::info!(
                "create_task_with_retry forwarding {} from {}",
                kie_result.status,
                url
            );
            Ok(kie_result)
        }
        Err(CreateTaskError::Transport(e)) => {
            tracing::error!("create_task_with_retry failed to reach {}: {:?}", url, e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

async fn create_task(
    url: &str,
    input_spec: &InputSpec,
    api_key: &str,
    client: &reqwest::Client,
    attempt: u32,
    max_retries: u32,
) -> Result<KieResult, CreateTaskError> {
    let res = client
        .post(url)
        .bearer_auth(api_key)
        .json(input_spec)
        .send()
        .await
        .map_err(CreateTaskError::Transport)?;

    let status = res.status();
    let text = res.text().await.map_err(CreateTaskError::Transport)?;
    let result = KieResult::new(status, text);

    let (code, msg) = result.summary();
    tracing::debug!(
        "create_task attempt {}/{}: status={} code={:?} msg={:?}",
        attempt,
        max_retries,
        status,
        code,
        msg
    );

    if result.ok {
        return Ok(result);
    }

    if result.is_retryable() && attempt < max_retries {
        tracing::warn!(
            "create_task attempt {}/{} hit a transient kie.ai error, retrying",
            attempt,
            max_retries
        );
    } else {
        tracing::warn!(
            "create_task attempt {}/{} failed with {}",
            attempt,
            max_retries,
            status
        );
    }

    Err(CreateTaskError::Rejected(result))
}

pub fn provide_input_spec(dto: &CreateTaskDto) -> Result<InputSpec, ApiError> {
    let input = &dto.input;
    // An unparseable duration becomes `None` and is left out of the jobs payload.
    let duration = input.duration.as_ref().and_then(coerce::parse_int);

    match TaskFamily::from_model(&dto.model) {
        TaskFamily::Runway => {
            let Some(duration) = duration.filter(|d| RUNWAY_DURATIONS.contains(d)) else {
                tracing::warn!(
                    "provide_input_spec rejected runway duration {:?}",
                    input.duration
                );
                return Err(TasksApiError::InvalidRunwayDuration.value());
            };

            let quality = match &input.resolution {
                Some(resolution) if coerce::is_truthy(resolution) => resolution.clone(),
                _ => RUNWAY_DEFAULT_QUALITY.into(),
            };

            Ok(InputSpec::Runway(RunwayInputSpec {
                prompt: input.prompt.clone(),
                image_url: input.image_url.clone(),
                model: dto.model.to_string(),
                quality,
                duration,
            }))
        }
        TaskFamily::Default => Ok(InputSpec::Jobs(JobsInputSpec {
            model: dto.model.to_string(),
            input: JobsInput {
                prompt: input.prompt.clone(),
                image_url: input.image_url.clone(),
                resolution: input.resolution.clone(),
                duration,
            },
        })),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::tasks::{dtos::create_task_dto::CreateTaskDto, enums::task_family::TaskFamily};

    use super::provide_input_spec;

    fn spec_json(body: Value) -> Value {
        let dto = CreateTaskDto::from_body(body).unwrap();
        serde_json::to_value(provide_input_spec(&dto).unwrap()).unwrap()
    }

    #[test]
    fn runway_payload_is_flattened() {
        let payload = spec_json(json!({
            "model": "runway-gen2",
            "input": {
                "prompt": "a cat surfing",
                "image_url": "https://example.com/cat.png",
                "duration": 8
            }
        }));

        assert_eq!(
            payload,
            json!({
                "prompt": "a cat surfing",
                "imageUrl": "https://example.com/cat.png",
                "model": "runway-gen2",
                "quality": "720p",
                "duration": 8
            })
        );
    }

    #[test]
    fn runway_quality_uses_resolution_when_set() {
        let payload = spec_json(json!({
            "model": "Runway",
            "input": { "prompt": "p", "resolution": "1080p", "duration": "10" }
        }));

        assert_eq!(payload["quality"], json!("1080p"));
        assert_eq!(payload["duration"], json!(10));

        let payload = spec_json(json!({
            "model": "Runway",
            "input": { "prompt": "p", "resolution": "", "duration": 5 }
        }));

        assert_eq!(payload["quality"], json!("720p"));
    }

    #[test]
    fn runway_duration_must_be_allowed() {
        for duration in [json!(7), json!(0), json!("abc"), json!(null), json!(15)] {
            let dto = CreateTaskDto::from_body(json!({
                "model": "runway-gen3",
                "input": { "prompt": "p", "duration": duration }
            }))
            .unwrap();
            let e = provide_input_spec(&dto).unwrap_err();

            assert_eq!(e.code, StatusCode::BAD_REQUEST);
            assert_eq!(
                e.message,
                "Invalid duration for Runway model. Allowed values: 5, 8, 10"
            );
        }

        let dto = CreateTaskDto::from_body(json!({
            "model": "runway-gen3",
            "input": { "prompt": "p" }
        }))
        .unwrap();

        assert!(provide_input_spec(&dto).is_err());
    }

    #[test]
    fn jobs_payload_keeps_input_nested() {
        let dto = CreateTaskDto::from_body(json!({
            "model": "bytedance/v1-pro-image-to-video",
            "input": {
                "prompt": "a dog",
                "image_url": "https://example.com/dog.png",
                "resolution": "720p",
                "duration": "5",
                "seed": 42
            }
        }))
        .unwrap();
        let spec = provide_input_spec(&dto).unwrap();

        assert_eq!(spec.family(), TaskFamily::Default);
        assert_eq!(
            serde_json::to_value(spec).unwrap(),
            json!({
                "model": "bytedance/v1-pro-image-to-video",
                "input": {
                    "prompt": "a dog",
                    "image_url": "https://example.com/dog.png",
                    "resolution": "720p",
                    "duration": 5
                }
            })
        );
    }

    #[test]
    fn jobs_payload_omits_missing_fields() {
        let payload = spec_json(json!({
            "model": "veo3_fast",
            "input": { "prompt": "a dog", "duration": "long" }
        }));

        assert_eq!(
            payload,
            json!({ "model": "veo3_fast", "input": { "prompt": "a dog" } })
        );
    }
}
