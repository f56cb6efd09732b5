//! Application layer errors.
//!
//! These errors represent failures of the ports the application calls into,
//! not business logic. Business logic errors are `DomainError` from
//! `crate::domain`; form validation failures are data, not errors.

use thiserror::Error;

use crate::domain::{HookId, LinkBlockId};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The repository has no link block with this id.
    #[error("Link block {id} not found")]
    NotFound { id: LinkBlockId },

    /// The storage layer failed (unavailable, corrupt, constraint violated).
    #[error("Storage error: {reason}")]
    Storage { reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Link block store error")]
    StoreLockError,

    /// The hook id does not name a known hook.
    #[error("Hook {id_hook} not found")]
    HookNotFound { id_hook: HookId },

    /// The rendering cache could not be cleared.
    #[error("Failed to clear cache for {template}: {reason}")]
    CacheInvalidation { template: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { id } => vec![
                format!("No link block has id {}", id),
                "Try: linklist list to see existing blocks".into(),
                "Omit --id to create a new block instead".into(),
            ],
            Self::Storage { reason } => vec![
                format!("Storage failed: {}", reason),
                "Check that the data file is readable and writable".into(),
                "Check storage.data_file in your configuration".into(),
            ],
            Self::StoreLockError => vec![
                "The link block store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::HookNotFound { id_hook } => vec![
                format!("Hook {} is not configured", id_hook),
                "Add it to the [[hooks]] table of your configuration".into(),
            ],
            Self::CacheInvalidation { .. } => vec![
                "The block was saved but the storefront may show stale links".into(),
                "Clear the module cache manually".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } | Self::HookNotFound { .. } => ErrorCategory::NotFound,
            Self::Storage { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::CacheInvalidation { .. } => ErrorCategory::Internal,
        }
    }
}
