use std::path::PathBuf;

use axum::response::{IntoResponse, Response};
use common::failure::Failure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("F5 configuration file not found: {}", .0.display())]
    F5ConfigNotFound(PathBuf),

    #[error("Failed to read F5 configuration file {}: {source}", path.display())]
    F5ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("F5 configuration is not valid JSON: {0}")]
    InvalidF5Config(#[from] serde_json::Error),
}

impl From<AppError> for Failure {
    fn from(err: AppError) -> Self {
        match &err {
            AppError::F5ConfigNotFound(_) => {
                Failure::not_found("F5 configuration is not available").with_details(err.to_string())
            }
            AppError::F5ConfigRead { .. } | AppError::InvalidF5Config(_) => {
                Failure::internal_error("Failed to load F5 configuration")
                    .with_details(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Failure::from(self).into_response()
    }
}
