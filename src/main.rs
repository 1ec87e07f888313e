use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};

use crate::{
    app::{envy::Envy, errors::DefaultApiError},
    tasks::apis::kie::config::KieConfig,
};

mod app;
mod auth;
mod tasks;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 20;
const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub kie_config: Arc<KieConfig>,
}

pub fn build_router(state: AppState, body_limit: usize) -> Router {
    let routes: Router = Router::new()
        .route("/", get(app::controller::get_root))
        // tasks
        .route(
            "/api/createTask",
            post(tasks::controller::create_task).fallback(app::controller::method_not_allowed),
        )
        // layers
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    routes
        .clone()
        .layer(app::cors::cors_layer())
        .layer(middleware::from_fn_with_state(
            Arc::new(std::sync::Mutex::new(routes)),
            app::cors::bypass_cors_unless_preflight,
        ))
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    tracing::info!(
        "starting in {}",
        envy.app_env.as_deref().unwrap_or(app_env.as_str())
    );

    // properties
    let port = envy.port.unwrap_or(DEFAULT_PORT);
    let rate_limit = envy
        .rate_limit_per_second
        .unwrap_or(DEFAULT_RATE_LIMIT_PER_SECOND)
        .max(1);
    let body_limit = envy.body_limit_bytes.unwrap_or(DEFAULT_BODY_LIMIT_BYTES);
    let kie_config = KieConfig::from_envy(&envy);

    tracing::info!(
        "kie upstream {} ({} attempts, {:?} apart)",
        kie_config.base_url,
        kie_config.max_retries,
        kie_config.retry_delay
    );

    let state = AppState {
        client: reqwest::Client::new(),
        kie_config: Arc::new(kie_config),
    };

    // app
    let app = build_router(state, body_limit).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|err: BoxError| async move {
                tracing::error!("unhandled service error: {}", err);
                DefaultApiError::InternalServerError.value()
            }))
            .layer(BufferLayer::new(1024))
            .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", e);
    }
}
