//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `linklist-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `LinkBlockRepository`: Link block storage
//!   - `HookRegistrar`: Module-on-hook registration
//!   - `CacheInvalidator`: Rendering cache clearing
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `FormDataProvider`: Load/save of a flat form

pub mod input;
pub mod output;

pub use input::FormDataProvider;
pub use output::{CacheInvalidator, HookRegistrar, LinkBlockRepository};

#[cfg(test)]
pub use output::{MockCacheInvalidator, MockHookRegistrar, MockLinkBlockRepository};
