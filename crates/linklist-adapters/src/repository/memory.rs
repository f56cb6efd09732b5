//! In-memory link block repository.

use std::sync::{Arc, RwLock};

use tracing::debug;

use linklist_core::{
    application::{ApplicationError, ports::LinkBlockRepository},
    domain::{FormTarget, LinkBlock, LinkBlockDraft, LinkBlockId},
    error::LinkListResult,
};

use super::table::BlockTable;

/// Thread-safe in-memory link block repository.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLinkBlockRepository {
    inner: Arc<RwLock<BlockTable>>,
}

impl InMemoryLinkBlockRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of blocks.
    pub fn len(&self) -> usize {
        self.inner.read().map(|t| t.len()).unwrap_or(0)
    }

    /// Check if repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LinkBlockRepository for InMemoryLinkBlockRepository {
    fn fetch(&self, id: LinkBlockId) -> LinkListResult<LinkBlock> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.fetch(id)
    }

    fn save(&self, target: FormTarget, draft: LinkBlockDraft) -> LinkListResult<LinkBlockId> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let id = inner.save(target, draft)?;
        debug!(id_link_block = %id, %target, "Stored link block in memory");
        Ok(id)
    }

    fn list(&self) -> LinkListResult<Vec<LinkBlock>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.list())
    }

    fn delete(&self, id: LinkBlockId) -> LinkListResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.delete(id)
    }
}
