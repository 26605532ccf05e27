use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum DebugError {
    #[error("request body is not valid JSON: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("failed to record payload: {0:#}")]
    Sink(anyhow::Error),
}

// No custom payload: callers get the same bare 500 as any other unhandled failure.
impl IntoResponse for DebugError {
    fn into_response(self) -> Response {
        error!(msg = "Debug request failed", error = %self);

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
