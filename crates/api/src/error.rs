use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use common::Error;

/// Error returned by route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// A required request field was missing or blank.
    MissingField(&'static str),
    Core(Error),
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        ApiError::Core(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("{field} is required") })),
            )
                .into_response(),
            ApiError::Core(e) if e.is_upstream() => {
                warn!(error = %e, "Upstream failure");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "error": "Bad Gateway", "message": e.to_string() })),
                )
                    .into_response()
            }
            ApiError::Core(e) => {
                error!(error = %e, "Unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal Server Error",
                        "message": "An unexpected error occurred.",
                    })),
                )
                    .into_response()
            }
        }
    }
}
