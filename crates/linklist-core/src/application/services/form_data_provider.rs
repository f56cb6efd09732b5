//! Link block form data provider.
//!
//! Loads a link block into its flat form shape and saves a submitted form
//! back through the repository. The provider owns nothing but the target id
//! and the language list; every load goes back to the repository.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{FormDataProvider, LinkBlockRepository},
    domain::{
        FormData, FormTarget, Language, LinkBlockDraft, LinkBlockFields, LinkBlockSubmission,
        LinkBlockValidator, ValidationError,
    },
    error::LinkListResult,
};

/// Form adapter for a single link block.
///
/// Construct one per request: the target id is mutable state.
pub struct LinkBlockFormDataProvider {
    repository: Arc<dyn LinkBlockRepository>,
    languages: Arc<[Language]>,
    target: FormTarget,
}

impl LinkBlockFormDataProvider {
    /// Create a provider in "new block" mode.
    pub fn new(
        repository: Arc<dyn LinkBlockRepository>,
        languages: impl Into<Arc<[Language]>>,
    ) -> Self {
        Self {
            repository,
            languages: languages.into(),
            target: FormTarget::Unset,
        }
    }

    /// Builder variant of [`Self::set_id_link_block`].
    pub fn with_id_link_block(mut self, target: impl Into<FormTarget>) -> Self {
        self.target = target.into();
        self
    }

    pub fn id_link_block(&self) -> FormTarget {
        self.target
    }

    pub fn set_id_link_block(&mut self, target: impl Into<FormTarget>) -> &mut Self {
        self.target = target.into();
        self
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Run the validation rules without saving anything.
    pub fn validate(&self, submission: &LinkBlockSubmission) -> Vec<ValidationError> {
        LinkBlockValidator::new(&self.languages).validate(submission)
    }
}

impl FormDataProvider for LinkBlockFormDataProvider {
    type Data = FormData<LinkBlockFields>;
    type Submission = FormData<LinkBlockSubmission>;

    #[instrument(skip_all, fields(target = %self.target))]
    fn get_data(&self) -> LinkListResult<Self::Data> {
        let FormTarget::Id(id) = self.target else {
            return Ok(FormData::empty());
        };

        let block = self.repository.fetch(id)?;
        debug!(id_hook = %block.id_hook, "Link block loaded");

        Ok(FormData::new(LinkBlockFields::from(&block)))
    }

    #[instrument(skip_all, fields(target = %self.target))]
    fn set_data(&mut self, data: Self::Submission) -> LinkListResult<Vec<ValidationError>> {
        // A post without the envelope is validated like an empty form.
        let submission = data.into_payload().unwrap_or_default();

        let errors = self.validate(&submission);
        if !errors.is_empty() {
            debug!(errors = errors.len(), "Submission rejected");
            return Ok(errors);
        }

        let draft = LinkBlockDraft::try_from(submission)?;
        let id = self.repository.save(self.target, draft)?;
        info!(id_link_block = %id, "Link block saved");

        self.set_id_link_block(id);
        Ok(Vec::new())
    }
}
