//! Link Block Service - main application orchestrator.
//!
//! This service coordinates the save workflow around the form provider:
//! 1. Validate and persist the submission (via `LinkBlockFormDataProvider`)
//! 2. Register the module on the block's hook
//! 3. Clear the module's rendering cache
//!
//! Steps 2 and 3 only run after a successful save. The provider itself knows
//! nothing about hooks or caches.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{CacheInvalidator, FormDataProvider, HookRegistrar, LinkBlockRepository},
        services::form_data_provider::LinkBlockFormDataProvider,
    },
    domain::{
        FormData, FormTarget, HookId, Language, LinkBlock, LinkBlockFields, LinkBlockId,
        LinkBlockSubmission, ValidationError,
    },
    error::{LinkListError, LinkListResult},
};

/// Result of [`LinkBlockService::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The block was persisted.
    Saved {
        id: LinkBlockId,
        /// `true` when the module was newly registered on the block's hook.
        hook_registered: bool,
    },
    /// The submission was rejected; nothing was persisted.
    Invalid(Vec<ValidationError>),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Main link block service.
///
/// Holds the shared adapters and hands out a fresh form provider per request.
pub struct LinkBlockService {
    repository: Arc<dyn LinkBlockRepository>,
    hooks: Box<dyn HookRegistrar>,
    cache: Box<dyn CacheInvalidator>,
    languages: Arc<[Language]>,
    template_file: String,
}

impl LinkBlockService {
    /// Create a new link block service with the given adapters.
    ///
    /// `template_file` keys the rendering cache cleared after every change.
    pub fn new(
        repository: Arc<dyn LinkBlockRepository>,
        hooks: Box<dyn HookRegistrar>,
        cache: Box<dyn CacheInvalidator>,
        languages: impl Into<Arc<[Language]>>,
        template_file: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            hooks,
            cache,
            languages: languages.into(),
            template_file: template_file.into(),
        }
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// A fresh form provider aimed at `target`.
    pub fn form_provider(&self, target: impl Into<FormTarget>) -> LinkBlockFormDataProvider {
        LinkBlockFormDataProvider::new(Arc::clone(&self.repository), Arc::clone(&self.languages))
            .with_id_link_block(target)
    }

    /// Load the form for `target`.
    pub fn load(
        &self,
        target: impl Into<FormTarget>,
    ) -> LinkListResult<FormData<LinkBlockFields>> {
        self.form_provider(target).get_data()
    }

    /// Validate a submission without saving it.
    pub fn validate(&self, submission: &LinkBlockSubmission) -> Vec<ValidationError> {
        self.form_provider(FormTarget::Unset).validate(submission)
    }

    /// Save a submission, then register its hook and clear the cache.
    #[instrument(skip_all, fields(target = %target))]
    pub fn save(
        &self,
        target: FormTarget,
        submission: LinkBlockSubmission,
    ) -> LinkListResult<SaveOutcome> {
        let id_hook = submission.id_hook;
        let mut provider = self.form_provider(target);

        let errors = provider.set_data(FormData::new(submission))?;
        if !errors.is_empty() {
            return Ok(SaveOutcome::Invalid(errors));
        }

        let FormTarget::Id(id) = provider.id_link_block() else {
            return Err(LinkListError::Internal {
                message: "provider has no target after a successful save".into(),
            });
        };

        // Validation guarantees the hook is present.
        let hook_registered = match id_hook {
            Some(id_hook) => self.register_hook(id, id_hook)?,
            None => false,
        };
        self.clear_cache(id)?;

        info!(id_link_block = %id, hook_registered, "Save completed");
        Ok(SaveOutcome::Saved {
            id,
            hook_registered,
        })
    }

    /// List all blocks, ordered by id.
    pub fn list(&self) -> LinkListResult<Vec<LinkBlock>> {
        self.repository.list()
    }

    /// Delete a block and clear the cache.
    #[instrument(skip(self))]
    pub fn delete(&self, id: LinkBlockId) -> LinkListResult<()> {
        self.repository.delete(id)?;
        info!(id_link_block = %id, "Link block deleted");
        self.clear_cache(id)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn register_hook(&self, id: LinkBlockId, id_hook: HookId) -> LinkListResult<bool> {
        self.hooks.ensure_registered(id_hook).inspect_err(|e| {
            warn!(
                error = %e,
                id_link_block = %id,
                id_hook = %id_hook,
                "Block saved but hook registration failed"
            );
        })
    }

    fn clear_cache(&self, id: LinkBlockId) -> LinkListResult<()> {
        self.cache.clear(&self.template_file).inspect_err(|e| {
            warn!(
                error = %e,
                id_link_block = %id,
                template = %self.template_file,
                "Block changed but cache was not cleared"
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::{MockCacheInvalidator, MockHookRegistrar, MockLinkBlockRepository},
        },
        domain::{BlockContent, LocalizedName},
    };
    use mockall::predicate::eq;

    const TEMPLATE: &str = "ps_linklist.tpl";

    fn service(
        repository: MockLinkBlockRepository,
        hooks: MockHookRegistrar,
        cache: MockCacheInvalidator,
    ) -> LinkBlockService {
        LinkBlockService::new(
            Arc::new(repository),
            Box::new(hooks),
            Box::new(cache),
            vec![Language::new(1, "en")],
            TEMPLATE,
        )
    }

    fn submission() -> LinkBlockSubmission {
        LinkBlockSubmission::new().with_hook(4).with_name(1, "Shop")
    }

    #[test]
    fn successful_save_registers_hook_and_clears_cache() {
        let mut repository = MockLinkBlockRepository::new();
        repository
            .expect_save()
            .times(1)
            .returning(|_, _| Ok(LinkBlockId::new(1)));

        let mut hooks = MockHookRegistrar::new();
        hooks
            .expect_ensure_registered()
            .with(eq(HookId::new(4)))
            .times(1)
            .returning(|_| Ok(true));

        let mut cache = MockCacheInvalidator::new();
        cache
            .expect_clear()
            .withf(|template| template == TEMPLATE)
            .times(1)
            .returning(|_| Ok(()));

        let outcome = service(repository, hooks, cache)
            .save(FormTarget::Unset, submission())
            .unwrap();

        assert_eq!(
            outcome,
            SaveOutcome::Saved {
                id: LinkBlockId::new(1),
                hook_registered: true
            }
        );
    }

    #[test]
    fn invalid_save_touches_nothing() {
        let mut repository = MockLinkBlockRepository::new();
        repository.expect_save().never();
        let mut hooks = MockHookRegistrar::new();
        hooks.expect_ensure_registered().never();
        let mut cache = MockCacheInvalidator::new();
        cache.expect_clear().never();

        let outcome = service(repository, hooks, cache)
            .save(FormTarget::Unset, LinkBlockSubmission::new())
            .unwrap();

        match outcome {
            SaveOutcome::Invalid(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn unknown_hook_fails_after_save_without_clearing_cache() {
        let mut repository = MockLinkBlockRepository::new();
        repository
            .expect_save()
            .returning(|_, _| Ok(LinkBlockId::new(2)));

        let mut hooks = MockHookRegistrar::new();
        hooks
            .expect_ensure_registered()
            .returning(|id_hook| Err(ApplicationError::HookNotFound { id_hook }.into()));

        let mut cache = MockCacheInvalidator::new();
        cache.expect_clear().never();

        let err = service(repository, hooks, cache)
            .save(FormTarget::Unset, submission())
            .unwrap_err();
        assert_eq!(
            err,
            LinkListError::Application(ApplicationError::HookNotFound {
                id_hook: HookId::new(4)
            })
        );
    }

    #[test]
    fn load_goes_through_a_fresh_provider() {
        let mut repository = MockLinkBlockRepository::new();
        repository.expect_fetch().times(1).returning(|id| {
            Ok(LinkBlock {
                id: Some(id),
                name: LocalizedName::new().with(1, "Shop"),
                id_hook: HookId::new(4),
                content: BlockContent::default(),
            })
        });

        let service = service(
            repository,
            MockHookRegistrar::new(),
            MockCacheInvalidator::new(),
        );

        assert!(service.load(FormTarget::Unset).unwrap().is_empty());
        let fields = service
            .load(LinkBlockId::new(8))
            .unwrap()
            .into_payload()
            .unwrap();
        assert_eq!(fields.id_link_block, Some(LinkBlockId::new(8)));
    }

    #[test]
    fn delete_clears_cache() {
        let mut repository = MockLinkBlockRepository::new();
        repository
            .expect_delete()
            .with(eq(LinkBlockId::new(3)))
            .times(1)
            .returning(|_| Ok(()));
        let mut cache = MockCacheInvalidator::new();
        cache.expect_clear().times(1).returning(|_| Ok(()));

        service(repository, MockHookRegistrar::new(), cache)
            .delete(LinkBlockId::new(3))
            .unwrap();
    }

    #[test]
    fn delete_of_missing_block_propagates_not_found() {
        let mut repository = MockLinkBlockRepository::new();
        repository
            .expect_delete()
            .returning(|id| Err(ApplicationError::NotFound { id }.into()));
        let mut cache = MockCacheInvalidator::new();
        cache.expect_clear().never();

        let err = service(repository, MockHookRegistrar::new(), cache)
            .delete(LinkBlockId::new(3))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn validate_uses_configured_languages() {
        let service = service(
            MockLinkBlockRepository::new(),
            MockHookRegistrar::new(),
            MockCacheInvalidator::new(),
        );
        let errors = service.validate(&LinkBlockSubmission::new().with_hook(1).with_empty_names());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].parameters, vec!["en".to_string()]);
    }
}
