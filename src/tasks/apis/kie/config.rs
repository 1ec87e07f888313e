use std::time::Duration;

use crate::{app::envy::Envy, tasks::enums::task_family::TaskFamily};

pub static API_URL: &str = "https://api.kie.ai";
pub static CREATE_TASK_PATH: &str = "/api/v1/jobs/createTask";
pub static RUNWAY_GENERATE_PATH: &str = "/api/v1/runway/generate";

/// Total attempts per task, the first one included.
pub const MAX_RETRIES: u32 = 4;
pub const RETRY_DELAY_MS: u64 = 1500;

pub const RUNWAY_DURATIONS: [i64; 3] = [5, 8, 10];
pub static RUNWAY_DEFAULT_QUALITY: &str = "720p";

#[derive(Debug, Clone)]
pub struct KieConfig {
    pub base_url: String,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for KieConfig {
    fn default() -> Self {
        Self {
            base_url: API_URL.to_string(),
            max_retries: MAX_RETRIES,
            retry_delay: Duration::from_millis(RETRY_DELAY_MS),
        }
    }
}

impl KieConfig {
    /// Only the base URL comes from the environment; the retry contract is fixed.
    pub fn from_envy(envy: &Envy) -> Self {
        let mut config = Self::default();

        if let Some(url) = &envy.kie_base_url {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        config
    }

    pub fn url(&self, family: TaskFamily) -> String {
        let path = match family {
            TaskFamily::Default => CREATE_TASK_PATH,
            TaskFamily::Runway => RUNWAY_GENERATE_PATH,
        };

        format!("{}{}", self.base_url, path)
    }
}
