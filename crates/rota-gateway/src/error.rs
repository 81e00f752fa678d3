//! Gateway error types.

use thiserror::Error;

/// Classified failure of a gateway operation.
///
/// The `Display` text is the exact message callers show end users;
/// [`crate::payload`] flattens it into the single-key error map the
/// rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service answered 404 for a specific lookup or mutation target.
    #[error("{0}")]
    NotFound(String),

    /// The service answered 400: a business rule rejected the operation.
    #[error("{0}")]
    Conflict(String),

    /// Any other status outside the 2xx range.
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),

    /// The response body did not decode into the shape the operation expects.
    #[error("Failed to parse JSON response.")]
    Parse,

    /// The exchange failed before a status was observed.
    #[error("Error connecting to the service.")]
    Connection,

    /// A mutation failed in a way worth naming, with the underlying cause.
    #[error("Failed to {action}: {cause}")]
    Failed { action: &'static str, cause: String },
}

impl ServiceError {
    pub(crate) fn failed(action: &'static str, cause: impl Into<String>) -> Self {
        Self::Failed {
            action,
            cause: cause.into(),
        }
    }
}
