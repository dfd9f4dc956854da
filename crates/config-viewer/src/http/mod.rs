pub mod api;
pub mod fallback;
pub mod statics;

use axum::{http::Method, routing::get, Router};
use common::api::{API_PREFIX, HEALTH_PATH};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(HEALTH_PATH, get(health_handler))
        .nest(API_PREFIX, api::router())
        .fallback_service(statics::service(&state.statics_dir))
}

/// Router with state and the HTTP layers `main` serves.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET]);

    router(&state)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health_handler() -> &'static str {
    "OK"
}
