//! Flat, UI-facing form shapes.
//!
//! The admin form posts and receives plain maps nested under a single
//! `link_block` key. These types pin that shape down:
//!
//! ```text
//! get_data  → { "link_block": { id_link_block, block_name, id_hook, cms, product, static } }
//! set_data  ← { "link_block": { block_name, id_hook, cms, product, static } }
//! ```
//!
//! The projection from [`LinkBlock`] is written out field by field; nothing
//! relies on the entity's in-memory layout.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{
    entities::link_block::{LinkBlock, LinkBlockDraft, LocalizedName},
    error::DomainError,
    value_objects::{HookId, LanguageId, LinkBlockId},
};

// ── FormData ─────────────────────────────────────────────────────────────────

/// Envelope nesting a form payload under the `link_block` key.
///
/// An empty envelope serializes as `{}`, which the admin UI reads as "no
/// existing data, render a blank form".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_block: Option<T>,
}

impl<T> FormData<T> {
    pub fn new(payload: T) -> Self {
        Self {
            link_block: Some(payload),
        }
    }

    pub fn empty() -> Self {
        Self { link_block: None }
    }

    pub fn is_empty(&self) -> bool {
        self.link_block.is_none()
    }

    pub fn payload(&self) -> Option<&T> {
        self.link_block.as_ref()
    }

    pub fn into_payload(self) -> Option<T> {
        self.link_block
    }
}

impl<T> Default for FormData<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// ── LinkBlockFields ──────────────────────────────────────────────────────────

/// The load-path projection of a [`LinkBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkBlockFields {
    pub id_link_block: Option<LinkBlockId>,
    pub block_name: LocalizedName,
    pub id_hook: HookId,
    pub cms: Vec<u32>,
    pub product: Vec<String>,
    #[serde(rename = "static")]
    pub static_pages: Vec<String>,
}

impl From<&LinkBlock> for LinkBlockFields {
    fn from(block: &LinkBlock) -> Self {
        Self {
            id_link_block: block.id,
            block_name: block.name.clone(),
            id_hook: block.id_hook,
            cms: block.content.cms.clone(),
            product: block.content.product.clone(),
            static_pages: block.content.static_pages.clone(),
        }
    }
}

// ── LinkBlockSubmission ──────────────────────────────────────────────────────

/// The save-path input, exactly as posted.
///
/// Required fields are optional here on purpose: missing values are reported
/// by the validator, not by deserialization. A `null` is treated like an
/// absent key, and a `null` slot list like an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkBlockSubmission {
    #[serde(default)]
    pub block_name: Option<BTreeMap<LanguageId, Option<String>>>,
    #[serde(default)]
    pub id_hook: Option<HookId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cms: Vec<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product: Vec<String>,
    #[serde(default, rename = "static", deserialize_with = "null_as_empty")]
    pub static_pages: Vec<String>,
}

impl LinkBlockSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hook(mut self, id_hook: impl Into<HookId>) -> Self {
        self.id_hook = Some(id_hook.into());
        self
    }

    /// Set one localized name, creating the `block_name` map if needed.
    pub fn with_name(mut self, id_lang: impl Into<LanguageId>, value: impl Into<String>) -> Self {
        self.block_name
            .get_or_insert_with(BTreeMap::new)
            .insert(id_lang.into(), Some(value.into()));
        self
    }

    /// Mark `block_name` as present without any localized value.
    pub fn with_empty_names(mut self) -> Self {
        self.block_name.get_or_insert_with(BTreeMap::new);
        self
    }

    pub fn with_cms(mut self, cms: impl IntoIterator<Item = u32>) -> Self {
        self.cms = cms.into_iter().collect();
        self
    }

    pub fn with_product<S: Into<String>>(mut self, pages: impl IntoIterator<Item = S>) -> Self {
        self.product = pages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_static<S: Into<String>>(mut self, pages: impl IntoIterator<Item = S>) -> Self {
        self.static_pages = pages.into_iter().map(Into::into).collect();
        self
    }

    /// Localized value for one language, `None` when absent or `null`.
    pub fn name_for(&self, id_lang: LanguageId) -> Option<&str> {
        self.block_name
            .as_ref()
            .and_then(|names| names.get(&id_lang))
            .and_then(|value| value.as_deref())
    }
}

impl From<LinkBlockFields> for LinkBlockSubmission {
    fn from(fields: LinkBlockFields) -> Self {
        Self {
            block_name: Some(
                fields
                    .block_name
                    .iter()
                    .map(|(id, value)| (id, Some(value.to_string())))
                    .collect(),
            ),
            id_hook: Some(fields.id_hook),
            cms: fields.cms,
            product: fields.product,
            static_pages: fields.static_pages,
        }
    }
}

impl TryFrom<LinkBlockSubmission> for LinkBlockDraft {
    type Error = DomainError;

    /// Build the repository payload. Call only after validation passed;
    /// missing required fields are an internal error at this point.
    fn try_from(submission: LinkBlockSubmission) -> Result<Self, Self::Error> {
        let id_hook = submission
            .id_hook
            .ok_or(DomainError::MissingRequiredField { field: "id_hook" })?;
        let names = submission
            .block_name
            .ok_or(DomainError::MissingRequiredField {
                field: "block_name",
            })?;

        Ok(Self {
            name: names
                .into_iter()
                .filter_map(|(id, value)| value.map(|v| (id, v)))
                .collect(),
            id_hook,
            cms: submission.cms,
            static_pages: submission.static_pages,
            product: submission.product,
            custom: Vec::new(),
        })
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::link_block::BlockContent;
    use serde_json::json;

    fn block() -> LinkBlock {
        LinkBlock {
            id: Some(LinkBlockId::new(3)),
            name: LocalizedName::new().with(1, "Products").with(2, "Produits"),
            id_hook: HookId::new(1),
            content: BlockContent {
                cms: vec![2],
                product: vec!["best-sales".into()],
                static_pages: vec!["contact".into()],
                custom: vec![],
            },
        }
    }

    #[test]
    fn empty_envelope_serializes_as_empty_map() {
        let data: FormData<LinkBlockFields> = FormData::empty();
        assert_eq!(serde_json::to_value(&data).unwrap(), json!({}));
        assert!(data.is_empty());
    }

    #[test]
    fn projection_has_exactly_the_form_keys() {
        let fields = LinkBlockFields::from(&block());
        let value = serde_json::to_value(FormData::new(fields)).unwrap();

        let inner = value["link_block"].as_object().unwrap();
        let mut keys: Vec<&str> = inner.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["block_name", "cms", "id_hook", "id_link_block", "product", "static"]
        );
        assert_eq!(value["link_block"]["block_name"]["2"], "Produits");
        assert_eq!(value["link_block"]["id_link_block"], 3);
    }

    #[test]
    fn submission_reads_admin_payload() {
        let data: FormData<LinkBlockSubmission> = serde_json::from_value(json!({
            "link_block": {
                "block_name": { "1": "Shop", "2": null },
                "id_hook": 4,
                "cms": null,
                "static": ["contact"]
            }
        }))
        .unwrap();

        let submission = data.into_payload().unwrap();
        assert_eq!(submission.id_hook, Some(HookId::new(4)));
        assert_eq!(submission.name_for(LanguageId::new(1)), Some("Shop"));
        assert_eq!(submission.name_for(LanguageId::new(2)), None);
        assert!(submission.cms.is_empty());
        assert!(submission.product.is_empty());
        assert_eq!(submission.static_pages, vec!["contact".to_string()]);
    }

    #[test]
    fn null_hook_reads_as_missing() {
        let submission: LinkBlockSubmission =
            serde_json::from_value(json!({ "id_hook": null })).unwrap();
        assert_eq!(submission.id_hook, None);
        assert_eq!(submission.block_name, None);
    }

    #[test]
    fn draft_requires_hook_and_name() {
        let missing_hook = LinkBlockSubmission::new().with_name(1, "Shop");
        assert_eq!(
            LinkBlockDraft::try_from(missing_hook),
            Err(DomainError::MissingRequiredField { field: "id_hook" })
        );

        let missing_name = LinkBlockSubmission::new().with_hook(1);
        assert_eq!(
            LinkBlockDraft::try_from(missing_name),
            Err(DomainError::MissingRequiredField {
                field: "block_name"
            })
        );
    }

    #[test]
    fn draft_reserves_an_empty_custom_slot() {
        let draft = LinkBlockDraft::try_from(
            LinkBlockSubmission::new()
                .with_hook(2)
                .with_name(1, "Shop")
                .with_cms([1, 2])
                .with_product(["new-products"])
                .with_static(["sitemap"]),
        )
        .unwrap();

        assert_eq!(draft.id_hook, HookId::new(2));
        assert_eq!(draft.name.get(LanguageId::new(1)), Some("Shop"));
        assert_eq!(draft.cms, vec![1, 2]);
        assert_eq!(draft.product, vec!["new-products".to_string()]);
        assert_eq!(draft.static_pages, vec!["sitemap".to_string()]);
        assert!(draft.custom.is_empty());
    }

    #[test]
    fn loaded_fields_convert_back_into_a_submission() {
        let submission = LinkBlockSubmission::from(LinkBlockFields::from(&block()));
        assert_eq!(submission.id_hook, Some(HookId::new(1)));
        assert_eq!(submission.name_for(LanguageId::new(2)), Some("Produits"));
        assert_eq!(submission.product, vec!["best-sales".to_string()]);
    }
}
