// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// These are invariant violations, never user-facing form validation
/// messages: those are returned as data (`ValidationError`).
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid {kind}: '{value}' is not a non-negative integer")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("Invalid language iso code: '{iso_code}'")]
    InvalidIsoCode { iso_code: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { kind, value } => vec![
                format!("'{}' cannot be used as {}", value, kind),
                "Identifiers are non-negative integers, e.g. 1, 2, 42".into(),
            ],
            Self::InvalidIsoCode { iso_code } => vec![
                format!("'{}' is not a language iso code", iso_code),
                "Use two-letter codes such as en, fr, de (or pt-br)".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("The '{}' field must be provided", field),
                "Validate the submission before saving it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } | Self::InvalidIsoCode { .. } => {
                ErrorCategory::Validation
            }
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
