pub mod form;
pub mod link_block;

pub use form::{FormData, LinkBlockFields, LinkBlockSubmission};
pub use link_block::{BlockContent, FormTarget, LinkBlock, LinkBlockDraft, LocalizedName};
