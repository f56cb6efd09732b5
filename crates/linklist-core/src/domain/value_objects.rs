//! Domain value objects: identifiers and Language.
//!
//! # Design
//!
//! These are pure value types: `Copy` where possible, equality-by-value, no
//! identity. Identifiers are newtypes over `u32` so a hook id can never be
//! passed where a block id is expected. All of them serialize transparently,
//! which keeps the form-data shapes identical to the plain integer maps the
//! admin UI posts.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Identifiers ──────────────────────────────────────────────────────────────

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u32>()
                    .map(Self)
                    .map_err(|_| DomainError::InvalidIdentifier {
                        kind: $label,
                        value: s.to_string(),
                    })
            }
        }
    };
}

id_newtype!(
    /// Identifier of a persisted link block.
    LinkBlockId,
    "id_link_block"
);

id_newtype!(
    /// Identifier of a display hook (an injection point in the host page).
    HookId,
    "id_hook"
);

id_newtype!(
    /// Identifier of a configured language.
    LanguageId,
    "id_lang"
);

// ── Language ─────────────────────────────────────────────────────────────────

/// A language configured in the shop.
///
/// Supplied by the host at startup and never mutated afterwards.
/// Deserializing goes through `try_new`, so the iso code is checked there too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLanguage")]
pub struct Language {
    pub id_lang: LanguageId,
    pub iso_code: String,
}

impl Language {
    /// Create a language, panicking on an invalid iso code.
    ///
    /// # Panics
    /// Panics if `iso_code` is not 2–5 ASCII letters/hyphens (use `try_new`
    /// for fallible).
    pub fn new(id_lang: impl Into<LanguageId>, iso_code: impl Into<String>) -> Self {
        match Self::try_new(id_lang, iso_code) {
            Ok(language) => language,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible constructor.
    pub fn try_new(
        id_lang: impl Into<LanguageId>,
        iso_code: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let iso_code = iso_code.into();
        let valid = (2..=5).contains(&iso_code.len())
            && iso_code.chars().all(|c| c.is_ascii_alphabetic() || c == '-');

        if !valid {
            return Err(DomainError::InvalidIsoCode { iso_code });
        }

        Ok(Self {
            id_lang: id_lang.into(),
            iso_code: iso_code.to_ascii_lowercase(),
        })
    }
}

#[derive(Deserialize)]
struct RawLanguage {
    id_lang: LanguageId,
    iso_code: String,
}

impl TryFrom<RawLanguage> for Language {
    type Error = DomainError;

    fn try_from(raw: RawLanguage) -> Result<Self, Self::Error> {
        Self::try_new(raw.id_lang, raw.iso_code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.iso_code, self.id_lang)
    }
}
