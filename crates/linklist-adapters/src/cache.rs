//! In-memory rendering cache.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use linklist_core::{
    application::{ApplicationError, ports::CacheInvalidator},
    error::LinkListResult,
};

/// Stand-in for the storefront template cache.
///
/// Records how often each template was cleared. Clones share the counters.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRenderCache {
    clears: Arc<RwLock<HashMap<String, usize>>>,
}

impl InMemoryRenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `template` has been cleared.
    pub fn clear_count(&self, template: &str) -> usize {
        self.clears
            .read()
            .ok()
            .and_then(|clears| clears.get(template).copied())
            .unwrap_or(0)
    }
}

impl CacheInvalidator for InMemoryRenderCache {
    fn clear(&self, template: &str) -> LinkListResult<()> {
        let mut clears = self
            .clears
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        *clears.entry(template.to_string()).or_default() += 1;
        debug!(template, "Render cache cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_clears_per_template() {
        let cache = InMemoryRenderCache::new();
        cache.clear("ps_linklist.tpl").unwrap();
        cache.clear("ps_linklist.tpl").unwrap();
        cache.clear("other.tpl").unwrap();

        assert_eq!(cache.clear_count("ps_linklist.tpl"), 2);
        assert_eq!(cache.clear_count("other.tpl"), 1);
        assert_eq!(cache.clear_count("never.tpl"), 0);
    }

    #[test]
    fn clones_share_counters() {
        let cache = InMemoryRenderCache::new();
        cache.clone().clear("ps_linklist.tpl").unwrap();
        assert_eq!(cache.clear_count("ps_linklist.tpl"), 1);
    }
}
