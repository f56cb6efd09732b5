//! Application layer for Link List.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (LinkBlockFormDataProvider, LinkBlockService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Validation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{LinkBlockFormDataProvider, LinkBlockService, SaveOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::{CacheInvalidator, FormDataProvider, HookRegistrar, LinkBlockRepository};

pub use error::ApplicationError;
