//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `LINKLIST__STORAGE__DATA_FILE=...`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`] if it exists
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use linklist_core::domain::{HookId, Language};

/// Prefix of environment overrides; sections are separated by `__`.
pub const ENV_PREFIX: &str = "LINKLIST";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where link blocks are stored.
    pub storage: StorageConfig,
    /// Languages every block name must be filled in for.
    pub languages: Vec<LanguageConfig>,
    /// Module identity used for hook registration and cache clearing.
    pub module: ModuleConfig,
    /// Known display hooks.
    pub hooks: Vec<HookConfig>,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub id_lang: u32,
    pub iso_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub name: String,
    pub template_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookConfig {
    pub id_hook: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_file: Self::default_data_file(),
            },
            languages: vec![LanguageConfig {
                id_lang: 1,
                iso_code: "en".into(),
            }],
            module: ModuleConfig {
                name: "ps_linklist".into(),
                template_file: "ps_linklist.tpl".into(),
            },
            hooks: [
                (1, "displayFooter"),
                (2, "displayLeftColumn"),
                (3, "displayRightColumn"),
            ]
            .into_iter()
            .map(|(id_hook, name)| HookConfig {
                id_hook,
                name: name.into(),
            })
            .collect(),
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `LINKLIST__*`
    /// environment variables.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path().as_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let config: Self = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        config.language_list()?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.linklist.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "linklist", "linklist")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| Self::local_config_path().to_path_buf())
    }

    /// Point storage at `data_file` when one was given on the command line.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.storage.data_file = path;
        }
        self
    }

    pub fn local_config_path() -> &'static Path {
        Path::new(".linklist.toml")
    }

    fn default_data_file() -> PathBuf {
        directories::ProjectDirs::from("com", "linklist", "linklist")
            .map(|d| d.data_dir().join("link_blocks.json"))
            .unwrap_or_else(|| PathBuf::from("link_blocks.json"))
    }

    /// Configured languages as domain values.
    pub fn language_list(&self) -> anyhow::Result<Vec<Language>> {
        if self.languages.is_empty() {
            anyhow::bail!("At least one language must be configured");
        }

        self.languages
            .iter()
            .map(|l| {
                Language::try_new(l.id_lang, l.iso_code.clone())
                    .with_context(|| format!("Invalid language {}", l.id_lang))
            })
            .collect()
    }

    /// Configured hooks as `(id, name)` pairs.
    pub fn hook_table(&self) -> impl Iterator<Item = (HookId, String)> + '_ {
        self.hooks
            .iter()
            .map(|h| (HookId::new(h.id_hook), h.name.clone()))
    }
}
