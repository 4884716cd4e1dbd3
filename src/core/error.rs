use thiserror::Error;

/// Errors that can occur while driving the signup flow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CadastroError {
    /// One or more schema rules failed for the active step.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A required uploaded artifact is missing or unreadable.
    #[error("artifact error: {0}")]
    Artifact(String),

    /// The submission collaborator rejected or failed the final send.
    #[error("submission error: {0}")]
    Submission(String),

    /// Writing the client-local summary failed.
    #[error("store error: {0}")]
    Store(String),
}

/// A single validation error with a field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "bank.pix_key").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error for a field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
