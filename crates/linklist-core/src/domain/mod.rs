// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Link List.
//!
//! This module contains pure business logic. All storage, hook registration
//! and cache concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or database calls
//! - **Few external crates**: std, thiserror, serde derives and tracing events
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    form::{FormData, LinkBlockFields, LinkBlockSubmission},
    link_block::{
        BlockContent, CustomLink, FormTarget, LinkBlock, LinkBlockDraft, LocalizedName,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use validation::{LinkBlockValidator, NOTIFICATION_DOMAIN, ValidationError};

pub use value_objects::{HookId, Language, LanguageId, LinkBlockId};
