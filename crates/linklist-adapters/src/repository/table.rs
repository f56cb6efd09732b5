//! The id-keyed block table shared by the repository adapters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use linklist_core::{
    application::ApplicationError,
    domain::{FormTarget, LinkBlock, LinkBlockDraft, LinkBlockId},
    error::LinkListResult,
};

/// Link blocks by id, plus the next id to hand out.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct BlockTable {
    next_id: u32,
    blocks: BTreeMap<LinkBlockId, LinkBlock>,
}

impl Default for BlockTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            blocks: BTreeMap::new(),
        }
    }
}

impl BlockTable {
    pub(crate) fn fetch(&self, id: LinkBlockId) -> LinkListResult<LinkBlock> {
        self.blocks
            .get(&id)
            .cloned()
            .ok_or_else(|| ApplicationError::NotFound { id }.into())
    }

    pub(crate) fn save(
        &mut self,
        target: FormTarget,
        draft: LinkBlockDraft,
    ) -> LinkListResult<LinkBlockId> {
        let id = match target {
            FormTarget::Id(id) if self.blocks.contains_key(&id) => id,
            FormTarget::Id(id) => return Err(ApplicationError::NotFound { id }.into()),
            FormTarget::Unset => self.allocate_id()?,
        };

        self.blocks.insert(id, LinkBlock::from_draft(id, draft));
        Ok(id)
    }

    pub(crate) fn list(&self) -> Vec<LinkBlock> {
        self.blocks.values().cloned().collect()
    }

    pub(crate) fn delete(&mut self, id: LinkBlockId) -> LinkListResult<()> {
        self.blocks
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ApplicationError::NotFound { id }.into())
    }

    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    fn allocate_id(&mut self) -> LinkListResult<LinkBlockId> {
        let id = LinkBlockId::new(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| ApplicationError::Storage {
                reason: "link block ids exhausted".into(),
            })?;
        Ok(id)
    }
}
