//! Error types for the WebAPI client.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures raised while talking to the WebAPI.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL is unusable.
    #[error("invalid URL `{value}`: {reason}")]
    InvalidUrl {
        /// Raw input supplied by the operator.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Build {
        /// Underlying builder failure.
        #[source]
        source: reqwest::Error,
    },
    /// The request never produced a response.
    #[error("{operation} request failed")]
    Transport {
        /// Control operation being attempted.
        operation: &'static str,
        /// Underlying transport failure.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{operation} rejected with status {status}")]
    Status {
        /// Control operation being attempted.
        operation: &'static str,
        /// Status returned by the server.
        status: StatusCode,
    },
}

/// Convenience alias for client results.
pub type ClientResult<T> = Result<T, ClientError>;
