//! Error types for the telemetry model.

use thiserror::Error;

/// Contract violations raised while reading telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The telemetry source reported a state outside the known set.
    #[error("unknown torrent state `{value}`")]
    UnknownState {
        /// Raw state string received from the telemetry source.
        value: String,
    },
}

/// Convenience alias for model results.
pub type ModelResult<T> = Result<T, ModelError>;
