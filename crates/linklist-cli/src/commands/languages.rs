//! `linklist languages` - print the configured languages.

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let languages = config.language_list().map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: Some(e.into()),
    })?;

    if output.is_json() {
        return output.json(&languages);
    }

    output.header("Languages:")?;
    for language in &languages {
        output.print(&format!("  {:<4} {}", language.id_lang.to_string(), language.iso_code))?;
    }
    Ok(())
}
