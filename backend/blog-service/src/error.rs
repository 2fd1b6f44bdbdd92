/// Error types for Blog Service
///
/// Every failure surfaced by the feed pipeline maps to exactly one variant.
/// Errors are converted to HTTP responses for API clients; the pipeline never
/// returns a partial feed.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A post, comment or like references a user that does not exist
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// A collection accessor failed (store unreachable, undecodable document)
    #[error("Dependency unavailable: {0}")]
    DependencyUnavailable(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::DataIntegrity(_) => "data_integrity",
            AppError::DependencyUnavailable(_) => "dependency_unavailable",
            AppError::NotFound(_) => "not_found",
            AppError::Internal(_) => "internal",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DataIntegrity(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::DependencyUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_msg = self.to_string();

        HttpResponse::build(status).json(serde_json::json!({
            "error": error_msg,
            "status": status.as_u16(),
        }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DependencyUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
