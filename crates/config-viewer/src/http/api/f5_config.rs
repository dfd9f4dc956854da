use axum::{extract::State, Json};
use serde_json::Value;

use crate::{error::AppError, state::AppState};

pub async fn handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    match state.f5_source.load().await {
        Ok(document) => Ok(Json(document)),
        Err(err) => {
            tracing::warn!(source = %state.f5_source.describe(), error = %err, "Failed to serve F5 configuration");
            Err(err)
        }
    }
}
