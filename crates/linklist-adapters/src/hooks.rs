//! In-memory hook registry.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, RwLock},
};

use tracing::{debug, info};

use linklist_core::{
    application::{ApplicationError, ports::HookRegistrar},
    domain::HookId,
    error::LinkListResult,
};

/// Hook registry holding a fixed hook table and the module's registrations.
///
/// Clones share the same registrations.
#[derive(Debug, Clone)]
pub struct InMemoryHookRegistrar {
    module: String,
    hooks: Arc<BTreeMap<HookId, String>>,
    registered: Arc<RwLock<BTreeSet<String>>>,
}

impl InMemoryHookRegistrar {
    /// Create a registrar for `module` with an empty hook table.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            hooks: Arc::new(BTreeMap::new()),
            registered: Arc::new(RwLock::new(BTreeSet::new())),
        }
    }

    /// Create a registrar for `module` knowing the given hooks.
    pub fn with_hooks<I, S>(module: impl Into<String>, hooks: I) -> Self
    where
        I: IntoIterator<Item = (HookId, S)>,
        S: Into<String>,
    {
        Self {
            hooks: Arc::new(
                hooks
                    .into_iter()
                    .map(|(id, name)| (id, name.into()))
                    .collect(),
            ),
            ..Self::new(module)
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// Name of a known hook.
    pub fn hook_name(&self, id_hook: HookId) -> Option<&str> {
        self.hooks.get(&id_hook).map(String::as_str)
    }

    /// Whether the module is registered on the named hook.
    pub fn is_registered(&self, hook_name: &str) -> bool {
        self.registered
            .read()
            .map(|set| set.contains(hook_name))
            .unwrap_or(false)
    }

    /// Hook names the module is registered on, sorted.
    pub fn registrations(&self) -> Vec<String> {
        self.registered
            .read()
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl HookRegistrar for InMemoryHookRegistrar {
    fn ensure_registered(&self, id_hook: HookId) -> LinkListResult<bool> {
        let hook_name = self
            .hook_name(id_hook)
            .ok_or(ApplicationError::HookNotFound { id_hook })?;

        let mut registered = self
            .registered
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if registered.contains(hook_name) {
            debug!(module = %self.module, hook = hook_name, "Already registered");
            return Ok(false);
        }

        registered.insert(hook_name.to_string());
        info!(module = %self.module, hook = hook_name, "Module registered on hook");
        Ok(true)
    }
}
