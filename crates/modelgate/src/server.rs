use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::llm::Resolver;
use crate::settings::SettingsStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub settings: SettingsStore,
    pub resolver: Arc<Resolver>,
}

pub fn build_app(state: AppState, request_timeout_secs: u64) -> Router {
    let api_v1 = Router::new()
        .route("/auth/login", post(handlers::v1::login))
        .route("/auth/register", post(handlers::v1::register))
        .route(
            "/settings/llm-provider",
            get(handlers::v1::get_llm_provider).put(handlers::v1::put_llm_provider),
        )
        .route(
            "/llm-provider/resolved",
            get(handlers::v1::resolved_llm_provider),
        );

    Router::new()
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/version", get(handlers::version))
        .nest("/api/v1", api_v1)
        .route(
            "/api/update-llm-provider",
            post(handlers::v1::update_llm_provider),
        )
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
}
