//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `linklist-adapters` crate provides implementations.

use crate::domain::{FormTarget, HookId, LinkBlock, LinkBlockDraft, LinkBlockId};
use crate::error::LinkListResult;

/// Port for link block persistence.
///
/// Implemented by:
/// - `linklist_adapters::repository::InMemoryLinkBlockRepository` (testing, embedding)
/// - `linklist_adapters::repository::JsonFileRepository` (CLI storage)
///
/// ## Design Notes
///
/// - Failures are returned unchanged to the caller; nothing above this port
///   retries or translates them
/// - `save` both creates and updates, selected by the [`FormTarget`]
#[cfg_attr(test, mockall::automock)]
pub trait LinkBlockRepository: Send + Sync {
    /// Fetch a block by id.
    ///
    /// # Errors
    ///
    /// `ApplicationError::NotFound` if no block has this id,
    /// `ApplicationError::Storage` if the storage layer fails.
    fn fetch(&self, id: LinkBlockId) -> LinkListResult<LinkBlock>;

    /// Persist a draft and return the block's id.
    ///
    /// `FormTarget::Unset` creates a new block; `FormTarget::Id` replaces the
    /// fields of an existing one.
    ///
    /// # Errors
    ///
    /// `ApplicationError::NotFound` when updating a missing block,
    /// `ApplicationError::Storage` if the storage layer fails.
    fn save(&self, target: FormTarget, draft: LinkBlockDraft) -> LinkListResult<LinkBlockId>;

    /// All blocks, ordered by id.
    fn list(&self) -> LinkListResult<Vec<LinkBlock>>;

    /// Remove a block.
    fn delete(&self, id: LinkBlockId) -> LinkListResult<()>;
}

/// Port for hook registration.
///
/// Implemented by:
/// - `linklist_adapters::hooks::InMemoryHookRegistrar`
#[cfg_attr(test, mockall::automock)]
pub trait HookRegistrar: Send + Sync {
    /// Resolve the hook's name and register the owning module on it unless it
    /// already is.
    ///
    /// Returns `true` if a new registration was made.
    ///
    /// # Errors
    ///
    /// `ApplicationError::HookNotFound` for an unknown hook id.
    fn ensure_registered(&self, id_hook: HookId) -> LinkListResult<bool>;
}

/// Port for clearing the storefront rendering cache.
///
/// Implemented by:
/// - `linklist_adapters::cache::InMemoryRenderCache`
#[cfg_attr(test, mockall::automock)]
pub trait CacheInvalidator: Send + Sync {
    /// Drop every cached rendering of `template`.
    fn clear(&self, template: &str) -> LinkListResult<()>;
}
