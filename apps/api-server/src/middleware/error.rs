//! Error handling - maps domain errors to `{error, details}` responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode, web};
use postforge_core::DomainError;
use postforge_shared::ErrorResponse;
use std::error::Error as _;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Post generation failed; `details` is safe to show the caller.
    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Generation(detail) => {
                ErrorResponse::new("Failed to generate post").with_details(detail)
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error(detail)
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Generation(ref cause) => {
                // The caller gets the generic message; the cause is only logged.
                tracing::error!(cause = %cause, "Post generation failed");
                if cause.is_configuration() {
                    tracing::error!("Provider credential missing - set OPENAI_API_KEY");
                }
                AppError::Generation(err.to_string())
            }
            DomainError::Store(e) => AppError::Internal(e.to_string()),
            DomainError::Export(msg) => AppError::Internal(msg),
        }
    }
}

/// Report malformed JSON bodies as `400 {error}`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err
        .source()
        .map(|s| s.to_string())
        .unwrap_or_else(|| err.to_string());
    AppError::BadRequest(format!("Invalid request body: {detail}")).into()
}

/// JSON extractor configuration shared by all routes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
