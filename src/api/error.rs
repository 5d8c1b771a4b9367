//! API error taxonomy

use thiserror::Error;

/// Errors produced by the backend API client
///
/// The chat and voice views branch on connectivity vs. server-side
/// failure, so each variant renders a distinguishable message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server responded with a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Request went out but no response came back
    #[error("No response from server. Is the backend running? ({source})")]
    NoResponse { source: reqwest::Error },

    /// The request could not be built or sent for a local reason
    #[error("Request failed: {source}")]
    Request { source: reqwest::Error },

    /// Success status but the body did not match the expected envelope
    #[error("Failed to parse server response: {source}")]
    Decode { source: reqwest::Error },
}

impl ApiError {
    /// Classify a transport-level failure from `reqwest`
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Request { source: err }
        } else {
            ApiError::NoResponse { source: err }
        }
    }

    /// True when the backend was never reached
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::NoResponse { .. } | ApiError::Request { .. })
    }
}
