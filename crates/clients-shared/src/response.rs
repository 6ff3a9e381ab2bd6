//! Standardized API error body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error envelope returned for every failed request.
///
/// `error` always carries the failure message; the remaining fields are
/// diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,

    /// The HTTP status code.
    pub status: u16,

    /// Human-readable failure message.
    pub error: String,

    /// Optional detail specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, error: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status,
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    // Common error constructors
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(400, error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(404, error)
    }

    pub fn conflict(error: impl Into<String>) -> Self {
        Self::new(409, error)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}
