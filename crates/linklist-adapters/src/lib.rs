//! Infrastructure adapters for Link List.
//!
//! This crate implements the driven ports defined in
//! `linklist-core::application::ports`. All storage I/O lives here.

pub mod cache;
pub mod hooks;
pub mod repository;

// Re-export commonly used adapters
pub use cache::InMemoryRenderCache;
pub use hooks::InMemoryHookRegistrar;
pub use repository::{InMemoryLinkBlockRepository, JsonFileRepository};
