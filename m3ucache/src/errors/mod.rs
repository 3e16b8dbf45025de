use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::caching::FetchError;

/// Failures that end a request, each with the body shape its clients expect
#[derive(Debug, Error)]
pub enum ApiError {
    /// Negotiating endpoint: upstream failed and nothing is cached
    #[error("{0}")]
    Unavailable(FetchError),
    /// Raw endpoint: upstream failed and nothing is cached
    #[error("Failed to fetch M3U: {0}")]
    FetchFailed(FetchError),
    #[error("Playlist not cached yet")]
    NotCached,
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Unavailable(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response(),
            Self::FetchFailed(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch M3U", "details": e.to_string() })),
            )
                .into_response(),
            Self::NotCached => (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                "Playlist not cached yet",
            )
                .into_response(),
            Self::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": message })),
            )
                .into_response(),
        }
    }
}

#[macro_export]
macro_rules! something_with_error_log {
    ($position:expr, $wrap:expr) => {
        |e| {
            use log::error;

            error!("{}: {}", $position, e);
            $wrap(e.to_string())
        }
    };
}

#[macro_export]
macro_rules! internal_error_with_log {
    ($msg:expr) => {{ $crate::something_with_error_log!($msg, $crate::errors::ApiError::Internal) }};
}

pub use internal_error_with_log;
pub use something_with_error_log;
