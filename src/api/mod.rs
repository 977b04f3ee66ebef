pub mod error;
pub mod health;
pub mod network;

use axum::{http::StatusCode, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cfg = state.cfg.clone();
    let static_dir = &cfg.data.static_dir;

    let mut router = Router::new()
        .route("/network_data", get(network::network_data))
        .route("/network_data/:source", get(network::source_network_data))
        .route("/substations/:source", get(network::get_substation))
        .route("/health", get(health::health_check))
        .route("/healthz", get(health::healthz))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state);

    if cfg.server.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET]),
        );
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(cfg.server.request_timeout_secs),
                )),
        )
        .layer(TraceLayer::new_for_http())
}
