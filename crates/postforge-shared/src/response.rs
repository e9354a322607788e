//! Error response body.

use serde::{Deserialize, Serialize};

/// Error payload: `{ "error": ..., "details"?: ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A short, human-readable summary of the problem.
    pub error: String,

    /// Diagnostic detail, only sent for server-side failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(error)
    }

    pub fn internal_error(details: impl Into<String>) -> Self {
        Self::new("Internal Server Error").with_details(details)
    }
}
