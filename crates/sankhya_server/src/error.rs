//! Error types for the service layer.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors while loading service configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::ServiceConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting has an unusable value.
    #[error("invalid setting {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Errors from the LLM reading collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ReadingError {
    /// No API key was configured.
    #[error("reading API key not configured")]
    MissingApiKey,

    /// Transport failure or undecodable response body.
    #[error("reading request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("reading provider returned {status}")]
    Upstream { status: u16 },

    /// The provider answered without any usable text.
    #[error("no reading text in provider response")]
    EmptyResponse,
}

/// Errors surfaced to HTTP clients as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body or query parameters missing, malformed, or out of range.
    #[error("invalid input data")]
    InvalidInput,

    /// Reading requested without an analysis record.
    #[error("analysis data required")]
    MissingAnalysis,

    /// No stored analysis with the requested id.
    #[error("analysis {0} not found")]
    NotFound(u64),

    /// The reading collaborator failed.
    #[error(transparent)]
    Reading(#[from] ReadingError),

    /// Unexpected server-side failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Status code and client-facing message.
    pub fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidInput => (StatusCode::BAD_REQUEST, "Invalid input data"),
            Self::MissingAnalysis => (StatusCode::BAD_REQUEST, "Analysis data required"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Analysis not found"),
            Self::Reading(ReadingError::MissingApiKey) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "OpenRouter API key not configured",
            ),
            Self::Reading(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate AI analysis",
            ),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.parts();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
