//! Command handlers plus the wiring they share.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::debug;

use linklist_adapters::{InMemoryHookRegistrar, InMemoryRenderCache, JsonFileRepository};
use linklist_core::{
    application::LinkBlockService,
    domain::{FormData, LinkBlockSubmission, ValidationError},
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub mod completions;
pub mod config;
pub mod delete;
pub mod init;
pub mod languages;
pub mod list;
pub mod save;
pub mod show;
pub mod validate;

/// Build the service from configuration: JSON file storage plus the
/// configured hook table.
pub(crate) fn build_service(config: &AppConfig) -> CliResult<LinkBlockService> {
    let languages = config
        .language_list()
        .map_err(|e| CliError::ConfigError {
            message: format!("{e:#}"),
            source: Some(e.into()),
        })?;

    debug!(
        data_file = %config.storage.data_file.display(),
        languages = languages.len(),
        "Building link block service"
    );

    Ok(LinkBlockService::new(
        Arc::new(JsonFileRepository::new(&config.storage.data_file)),
        Box::new(InMemoryHookRegistrar::with_hooks(
            config.module.name.clone(),
            config.hook_table(),
        )),
        Box::new(InMemoryRenderCache::new()),
        languages,
        config.module.template_file.clone(),
    ))
}

/// Read a posted form from `file`, or stdin when `None`.
///
/// A document without the `link_block` key is an empty submission.
pub(crate) fn read_submission(file: Option<&PathBuf>) -> CliResult<LinkBlockSubmission> {
    let (raw, origin) = match file {
        Some(path) => (
            fs::read_to_string(path)
                .with_cli_context(|| format!("Failed to read '{}'", path.display()))?,
            path.display().to_string(),
        ),
        None => (
            io::read_to_string(io::stdin()).with_cli_context(|| "Failed to read stdin")?,
            "stdin".to_string(),
        ),
    };

    parse_submission(&raw, Path::new(&origin))
}

fn parse_submission(raw: &str, origin: &Path) -> CliResult<LinkBlockSubmission> {
    if raw.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: format!("{} is empty", origin.display()),
            source: None,
        });
    }

    let form: FormData<LinkBlockSubmission> = serde_json::from_str(raw)
        .with_cli_context(|| format!("Failed to parse {}", origin.display()))?;

    Ok(form.into_payload().unwrap_or_default())
}

/// Print validation errors in the requested format and turn them into the
/// command's error.
pub(crate) fn reject(errors: Vec<ValidationError>, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&errors)?;
    }
    Err(CliError::ValidationFailed { errors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use linklist_core::domain::{HookId, LanguageId};

    #[test]
    fn parses_enveloped_submission() {
        let raw = r#"{"link_block": {"id_hook": 2, "block_name": {"1": "Shop"}, "static": null}}"#;
        let submission = parse_submission(raw, Path::new("test")).unwrap();
        assert_eq!(submission.id_hook, Some(HookId::new(2)));
        assert_eq!(submission.name_for(LanguageId::new(1)), Some("Shop"));
        assert!(submission.static_pages.is_empty());
    }

    #[test]
    fn missing_envelope_is_empty_submission() {
        let submission = parse_submission("{}", Path::new("test")).unwrap();
        assert_eq!(submission, LinkBlockSubmission::default());
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(matches!(
            parse_submission("  \n", Path::new("stdin")),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            parse_submission("{\"link_block\": ", Path::new("x.json")),
            Err(CliError::Json { .. })
        ));
    }

    #[test]
    fn service_builds_from_defaults() {
        let service = build_service(&AppConfig::default()).unwrap();
        assert_eq!(service.languages().len(), 1);
    }
}
