//! Common result and error types for the translation workspace.

/// The standard result type for operations that can only fail on a bug.
///
/// `Err` indicates a broken internal contract (for example an upstream stage
/// handed over data it promised to have rejected), not a user-facing input
/// error. Input errors have their own typed enums in each crate.
pub type VqmResult<T> = Result<T, InternalError>;

/// An internal error indicating a violated contract between pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
