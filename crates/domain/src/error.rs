//! Unified error types for the domain layer
//!
//! Provides a common error type for parsing and validating catalog inputs,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., unknown filter field)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for filter values and sort keys)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for inputs the domain does not recognise.
    ///
    /// # Example
    /// ```ignore
    /// return Err(DomainError::validation(format!("Unknown filter field: {field}")));
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = DomainError::validation("Unknown filter field: colour");
        assert_eq!(
            err.to_string(),
            "Validation failed: Unknown filter field: colour"
        );

        let err = DomainError::parse("Invalid level: nine");
        assert_eq!(err.to_string(), "Parse error: Invalid level: nine");
    }
}
