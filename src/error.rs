//! Error types for the clustering operations.

use thiserror::Error;

/// Result type for clustering operations.
pub type ClusterResult<T> = Result<T, ClusterError>;

/// Errors produced by the clustering operations.
///
/// Only argument validation is reported through this type. Failures inside
/// the concept tree itself are never caught or translated here.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// An argument failed validation. Raised before any tree work begins,
    /// so no partial state is produced.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl ClusterError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        ClusterError::InvalidArgument {
            message: message.into(),
        }
    }
}
