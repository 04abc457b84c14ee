use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};

use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use super::{health, predict};
use crate::config::ServerConfig;

/// Create the router serving the health check, the prediction endpoint and the index page
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_check))
        // symptom text has no length limit
        .route(
            "/predict",
            post(predict::predict).layer(DefaultBodyLimit::disable()),
        )
        .route_service("/", ServeFile::new(&server.index_path))
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http());

    if server.cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
