//! Error types for port operations.

use vtm_builder_domain::{DiceError, DomainError};

use crate::stores::SessionId;

/// Sheet storage errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No sheet saved under this name.
    #[error("Sheet not found: {0}")]
    NotFound(String),

    /// Filesystem operation failed - includes operation name for tracing.
    #[error("Storage error in {operation}: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },
}

impl StoreError {
    pub fn not_found(name: impl ToString) -> Self {
        Self::NotFound(name.to_string())
    }

    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Failures surfaced by session use cases.
///
/// Rule-guard rejections are not errors; they come back as `applied: false`.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Dice(#[from] DiceError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Store(e) => e.is_not_found(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_counts_as_not_found() {
        let err = SessionError::from(StoreError::not_found("Beckett"));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Sheet not found: Beckett");
    }

    #[test]
    fn domain_errors_pass_through() {
        let err = SessionError::from(DomainError::validation("bad"));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation failed: bad");
    }
}
