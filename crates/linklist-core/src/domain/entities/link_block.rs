//! The link block entity and the values the repository works with.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{HookId, LanguageId, LinkBlockId};

// ── FormTarget ───────────────────────────────────────────────────────────────

/// Which block a form works on.
///
/// `Unset` means "create a new block"; `Id` means "load or update this one".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormTarget {
    #[default]
    Unset,
    Id(LinkBlockId),
}

impl FormTarget {
    pub const fn id(self) -> Option<LinkBlockId> {
        match self {
            Self::Unset => None,
            Self::Id(id) => Some(id),
        }
    }

    pub const fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<LinkBlockId> for FormTarget {
    fn from(id: LinkBlockId) -> Self {
        Self::Id(id)
    }
}

impl From<Option<LinkBlockId>> for FormTarget {
    fn from(id: Option<LinkBlockId>) -> Self {
        id.map_or(Self::Unset, Self::Id)
    }
}

impl fmt::Display for FormTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("new"),
            Self::Id(id) => write!(f, "#{id}"),
        }
    }
}

// ── LocalizedName ────────────────────────────────────────────────────────────

/// A display name keyed by language id.
///
/// Ordered by language id so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedName(BTreeMap<LanguageId, String>);

impl LocalizedName {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id_lang: impl Into<LanguageId>, value: impl Into<String>) -> Self {
        self.set(id_lang, value);
        self
    }

    pub fn set(&mut self, id_lang: impl Into<LanguageId>, value: impl Into<String>) {
        self.0.insert(id_lang.into(), value.into());
    }

    pub fn get(&self, id_lang: LanguageId) -> Option<&str> {
        self.0.get(&id_lang).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LanguageId, &str)> {
        self.0.iter().map(|(id, v)| (*id, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(LanguageId, String)> for LocalizedName {
    fn from_iter<I: IntoIterator<Item = (LanguageId, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ── BlockContent ─────────────────────────────────────────────────────────────

/// A custom link entry. Reserved: the form path always persists this empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLink {
    pub id_lang: LanguageId,
    pub title: String,
    pub url: String,
}

/// What a link block points to, grouped by slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockContent {
    /// CMS page ids.
    #[serde(default)]
    pub cms: Vec<u32>,
    /// Product listing pages (`new-products`, `best-sales`, ...).
    #[serde(default)]
    pub product: Vec<String>,
    /// Static pages (`contact`, `sitemap`, ...).
    #[serde(default, rename = "static")]
    pub static_pages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<CustomLink>,
}

// ── LinkBlock ────────────────────────────────────────────────────────────────

/// A persisted block of links shown on one hook of the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkBlock {
    /// Absent until the repository assigns one.
    pub id: Option<LinkBlockId>,
    pub name: LocalizedName,
    pub id_hook: HookId,
    pub content: BlockContent,
}

impl LinkBlock {
    /// Materialize a draft under the id the repository assigned.
    pub fn from_draft(id: LinkBlockId, draft: LinkBlockDraft) -> Self {
        Self {
            id: Some(id),
            name: draft.name,
            id_hook: draft.id_hook,
            content: BlockContent {
                cms: draft.cms,
                product: draft.product,
                static_pages: draft.static_pages,
                custom: draft.custom,
            },
        }
    }
}

// ── LinkBlockDraft ───────────────────────────────────────────────────────────

/// Validated field values handed to the repository on save.
///
/// `custom` is the extension slot for sub-entity types the form does not edit
/// yet; it is always empty when built from a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBlockDraft {
    pub name: LocalizedName,
    pub id_hook: HookId,
    pub cms: Vec<u32>,
    pub static_pages: Vec<String>,
    pub product: Vec<String>,
    pub custom: Vec<CustomLink>,
}
