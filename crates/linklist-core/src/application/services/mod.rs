//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "load the block form" or "save a block".

pub mod form_data_provider;
pub mod link_block_service;

pub use form_data_provider::LinkBlockFormDataProvider;
pub use link_block_service::{LinkBlockService, SaveOutcome};
