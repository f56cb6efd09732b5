use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{entities::form::LinkBlockSubmission, value_objects::Language};

/// Translation namespace of every link block notification.
pub const NOTIFICATION_DOMAIN: &str = "Admin.Catalog.Notification";

pub const MISSING_ID_HOOK: &str = "Missing id_hook";
pub const MISSING_BLOCK_NAME: &str = "Missing block_name";
pub const MISSING_BLOCK_NAME_FOR_LANGUAGE: &str = "Missing block_name value for language %s";

/// A user-correctable problem with a submitted form.
///
/// `key` is an untranslated message template with `%s` placeholders, ready
/// to hand to a translation layer together with `domain` and `parameters`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    pub key: String,
    pub domain: String,
    pub parameters: Vec<String>,
}

impl ValidationError {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            domain: NOTIFICATION_DOMAIN.to_string(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameters.push(parameter.into());
        self
    }

    /// Render the untranslated template, substituting `%s` in order.
    ///
    /// Surplus placeholders are left as-is.
    pub fn message(&self) -> String {
        let mut out = String::with_capacity(self.key.len());
        let mut params = self.parameters.iter();
        let mut rest = self.key.as_str();

        while let Some(pos) = rest.find("%s") {
            out.push_str(&rest[..pos]);
            match params.next() {
                Some(p) => out.push_str(p),
                None => out.push_str("%s"),
            }
            rest = &rest[pos + 2..];
        }
        out.push_str(rest);
        out
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Validation rules for a link block submission.
///
/// Rules never short-circuit each other; every problem is reported in one
/// pass so the form can show them all at once. Output order is rule order,
/// then the order of the configured languages.
pub struct LinkBlockValidator<'a> {
    languages: &'a [Language],
}

impl<'a> LinkBlockValidator<'a> {
    pub fn new(languages: &'a [Language]) -> Self {
        Self { languages }
    }

    pub fn validate(&self, submission: &LinkBlockSubmission) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if submission.id_hook.is_none() {
            errors.push(ValidationError::new(MISSING_ID_HOOK));
        }

        // Per-language checks only apply once the field exists at all.
        if submission.block_name.is_none() {
            errors.push(ValidationError::new(MISSING_BLOCK_NAME));
        } else {
            for language in self.languages {
                let blank = submission.name_for(language.id_lang).is_none_or(is_blank);

                if blank {
                    errors.push(
                        ValidationError::new(MISSING_BLOCK_NAME_FOR_LANGUAGE)
                            .with_parameter(language.iso_code.as_str()),
                    );
                }
            }
        }

        debug!(errors = errors.len(), "Link block submission validated");
        errors
    }
}

/// A localized name that the form treats as not filled in.
///
/// `"0"` counts as blank alongside empty and whitespace-only values.
fn is_blank(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "0"
}
