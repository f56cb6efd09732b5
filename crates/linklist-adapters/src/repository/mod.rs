//! Link block repository adapters.

mod json_file;
mod memory;
mod table;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryLinkBlockRepository;
