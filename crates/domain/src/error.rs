//! Error types for the builder domain.
//!
//! Guard failures on actions are not errors: mutators report them by
//! returning `false`. `DomainError` covers the paths that take outside input,
//! namely name parsing and sheet import.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Document or field failed to parse
    #[error("Parse error: {0}")]
    Parse(String),

    /// A parsed value is outside its allowed shape or range
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A value conflicts with another part of the character
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string doesn't
    /// match any known name, and when an imported document is not valid JSON.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("virtues must be at least 1");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: virtues must be at least 1");
    }

    #[test]
    fn test_constraint_error() {
        let err = DomainError::constraint("Thaumaturgy is not a Brujah discipline");
        assert!(matches!(err, DomainError::Constraint(_)));
        assert_eq!(
            err.to_string(),
            "Constraint violation: Thaumaturgy is not a Brujah discipline"
        );
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let domain_err: DomainError = json_err.into();
        assert!(matches!(domain_err, DomainError::Parse(_)));
    }
}
