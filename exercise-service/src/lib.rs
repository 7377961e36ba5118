pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::{
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{request_id_from_headers, request_id_middleware},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ExerciseConfig;
use crate::services::UserRepository;

pub const SERVICE_NAME: &str = "exercise-service";

#[derive(Clone)]
pub struct AppState {
    pub config: ExerciseConfig,
    pub users: Arc<dyn UserRepository>,
}

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route(
            "/api/users",
            post(handlers::create_user).get(handlers::list_users),
        )
        .route(
            "/api/users/:_id/exercises",
            post(handlers::add_exercise).get(handlers::list_exercises),
        )
        .route("/api/users/:_id/logs", get(handlers::exercise_log))
        .nest_service("/public", static_files)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    request_id = %request_id_from_headers(request.headers()),
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outside the trace layer so generated ids reach the request span
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
