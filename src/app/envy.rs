use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub kie_base_url: Option<String>,

    pub rate_limit_per_second: Option<u64>,
    pub body_limit_bytes: Option<usize>,
}
