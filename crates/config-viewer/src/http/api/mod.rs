use axum::{routing::get, Router};
use common::api::F5_CONFIG_ROUTE;

use crate::{http::fallback, state::AppState};

mod f5_config;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(F5_CONFIG_ROUTE, get(f5_config::handler))
        .fallback(fallback::handler)
}
