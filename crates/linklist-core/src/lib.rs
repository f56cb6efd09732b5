//! Link List Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Link List
//! admin adapter: it loads a link block into a flat form, validates submitted
//! forms (including per-language completeness) and persists them through a
//! repository port.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          linklist-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (LinkBlockService, FormDataProvider)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Repository, Hooks, Cache)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    linklist-adapters (Infrastructure)   │
//! │ (InMemoryRepository, JsonFileRepository)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (LinkBlock, FormData, LinkBlockValidator)│
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use linklist_core::prelude::*;
//!
//! # fn run(repository: Arc<dyn LinkBlockRepository>) -> LinkListResult<()> {
//! let languages = vec![Language::new(1, "en"), Language::new(2, "fr")];
//! let mut provider = LinkBlockFormDataProvider::new(repository, languages);
//!
//! let errors = provider.set_data(FormData::new(
//!     LinkBlockSubmission::new()
//!         .with_hook(1)
//!         .with_name(1, "Shop")
//!         .with_name(2, "Boutique"),
//! ))?;
//! assert!(errors.is_empty());
//!
//! // The provider now targets the saved block.
//! let form = provider.get_data()?;
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        LinkBlockFormDataProvider, LinkBlockService, SaveOutcome,
        ports::{CacheInvalidator, FormDataProvider, HookRegistrar, LinkBlockRepository},
    };
    pub use crate::domain::{
        BlockContent, FormData, FormTarget, HookId, Language, LanguageId, LinkBlock,
        LinkBlockDraft, LinkBlockFields, LinkBlockId, LinkBlockSubmission, LocalizedName,
        ValidationError,
    };
    pub use crate::error::{LinkListError, LinkListResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
