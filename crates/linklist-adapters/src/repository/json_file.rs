//! Link block repository persisted to a single JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, instrument};

use linklist_core::{
    application::{ApplicationError, ports::LinkBlockRepository},
    domain::{FormTarget, LinkBlock, LinkBlockDraft, LinkBlockId},
    error::{LinkListError, LinkListResult},
};

use super::table::BlockTable;

/// Production repository storing every block in one JSON document.
///
/// Every operation reads the file again, so several processes see each
/// other's writes. A missing file is an empty store; it is created on the
/// first write. Writes go to a sibling temp file that is then renamed over
/// the original.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileRepository {
    /// Create a repository backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> LinkListResult<BlockTable> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BlockTable::default()),
            Err(e) => return Err(storage_error(&self.path, "read", &e)),
        };

        serde_json::from_str(&raw).map_err(|e| storage_error(&self.path, "parse", &e))
    }

    fn write_table(&self, table: &BlockTable) -> LinkListResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| storage_error(parent, "create directory", &e))?;
            }
        }

        let json = serde_json::to_string_pretty(table)
            .map_err(|e| storage_error(&self.path, "serialize", &e))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| storage_error(&tmp, "write", &e))?;
        fs::rename(&tmp, &self.path).map_err(|e| storage_error(&self.path, "replace", &e))
    }

    /// Read, modify and write back under the write lock.
    fn update<T>(
        &self,
        op: impl FnOnce(&mut BlockTable) -> LinkListResult<T>,
    ) -> LinkListResult<T> {
        let _guard = self
            .lock
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut table = self.read_table()?;
        let value = op(&mut table)?;
        self.write_table(&table)?;
        Ok(value)
    }

    fn read<T>(&self, op: impl FnOnce(&BlockTable) -> LinkListResult<T>) -> LinkListResult<T> {
        let _guard = self
            .lock
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        op(&self.read_table()?)
    }
}

impl LinkBlockRepository for JsonFileRepository {
    fn fetch(&self, id: LinkBlockId) -> LinkListResult<LinkBlock> {
        self.read(|table| table.fetch(id))
    }

    #[instrument(skip(self, draft), fields(path = %self.path.display()))]
    fn save(&self, target: FormTarget, draft: LinkBlockDraft) -> LinkListResult<LinkBlockId> {
        let id = self.update(|table| table.save(target, draft))?;
        debug!(id_link_block = %id, "Link block written");
        Ok(id)
    }

    fn list(&self) -> LinkListResult<Vec<LinkBlock>> {
        self.read(|table| Ok(table.list()))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn delete(&self, id: LinkBlockId) -> LinkListResult<()> {
        self.update(|table| table.delete(id))
    }
}

fn storage_error(path: &Path, operation: &str, e: &dyn std::error::Error) -> LinkListError {
    ApplicationError::Storage {
        reason: format!("failed to {} '{}': {}", operation, path.display(), e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use linklist_core::domain::{HookId, LocalizedName};
    use tempfile::TempDir;

    fn draft() -> LinkBlockDraft {
        LinkBlockDraft {
            name: LocalizedName::new().with(1, "Shop").with(2, "Boutique"),
            id_hook: HookId::new(2),
            cms: vec![1, 2],
            static_pages: vec!["sitemap".into()],
            product: vec!["prices-drop".into()],
            custom: vec![],
        }
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let repository = JsonFileRepository::new(dir.path().join("blocks.json"));

        assert!(repository.list().unwrap().is_empty());
        assert!(!repository.path().exists());
    }

    #[test]
    fn save_creates_file_and_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/data/blocks.json");
        let repository = JsonFileRepository::new(&path);

        let id = repository.save(FormTarget::Unset, draft()).unwrap();
        assert!(path.exists());
        assert_eq!(repository.fetch(id).unwrap().content.product, vec!["prices-drop"]);
    }

    #[test]
    fn writes_are_visible_to_a_second_instance() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blocks.json");

        let id = JsonFileRepository::new(&path)
            .save(FormTarget::Unset, draft())
            .unwrap();
        let block = JsonFileRepository::new(&path).fetch(id).unwrap();

        assert_eq!(block.name.get(2.into()), Some("Boutique"));
        assert_eq!(block.content.static_pages, vec!["sitemap"]);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blocks.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileRepository::new(&path).list().unwrap_err();
        assert!(matches!(
            err,
            LinkListError::Application(ApplicationError::Storage { .. })
        ));
    }

    #[test]
    fn failed_update_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blocks.json");
        let repository = JsonFileRepository::new(&path);
        repository.save(FormTarget::Unset, draft()).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let err = repository
            .save(FormTarget::Id(LinkBlockId::new(99)), draft())
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }
}
