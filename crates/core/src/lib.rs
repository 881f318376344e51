//! Shared primitives for all Rust crates in Gatekeep.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Gatekeep crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Input text did not classify into a known intent.
    #[error("intent not recognized: {0}")]
    IntentNotRecognized(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn error_messages_carry_category_prefix() {
        let error = AppError::NotFound("user 'alice'".to_owned());
        assert_eq!(error.to_string(), "not found: user 'alice'");
    }

    #[test]
    fn intent_error_is_distinct_from_validation() {
        let error = AppError::IntentNotRecognized("no intent".to_owned());
        assert!(matches!(error, AppError::IntentNotRecognized(_)));
    }
}
