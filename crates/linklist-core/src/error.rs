//! Unified error handling for Link List Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Link List Core operations.
///
/// Everything here is an infrastructure or invariant failure. Form validation
/// problems never travel through this type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LinkListError {
    /// Errors from the domain layer (invariant violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (port failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl LinkListError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Link List".into(),
                "Please report this issue at: https://github.com/cosecruz/linklist/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::StoreLockError | ApplicationError::Storage { .. })
        )
    }

    /// `true` when the error means the requested block does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::NotFound { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type LinkListResult<T> = Result<T, LinkListError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LinkBlockId;

    #[test]
    fn storage_and_lock_errors_are_retryable() {
        assert!(LinkListError::from(ApplicationError::StoreLockError).is_retryable());
        assert!(
            LinkListError::from(ApplicationError::Storage {
                reason: "busy".into()
            })
            .is_retryable()
        );
        assert!(
            !LinkListError::from(ApplicationError::NotFound {
                id: LinkBlockId::new(1)
            })
            .is_retryable()
        );
    }

    #[test]
    fn not_found_is_detected() {
        let err = LinkListError::from(ApplicationError::NotFound {
            id: LinkBlockId::new(1),
        });
        assert!(err.is_not_found());
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn domain_categories_map_through() {
        let err = LinkListError::from(DomainError::InvalidIsoCode {
            iso_code: "?".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
