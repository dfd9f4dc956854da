use axum::extract::OriginalUri;
use common::failure::Failure;

/// Unknown `/api` routes answer with a JSON failure instead of the SPA shell.
pub async fn handler(OriginalUri(uri): OriginalUri) -> Failure {
    tracing::debug!(path = %uri.path(), "No API route matched");
    Failure::not_found(format!("No API route for {}", uri.path()))
}
