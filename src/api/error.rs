//! Error type for the API client.

use thiserror::Error;

/// Errors that can occur talking to the mentor service.
///
/// The client never retries; every failure propagates to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the service at all.
    #[error("Connection to mentor service failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("Mentor service returned status {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode mentor service response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Get error type string for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Connection { .. } => "connection_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}
