//! `linklist list` - print stored link blocks.

use linklist_core::domain::{LinkBlock, LanguageId};

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::build_service(&config)?;
    let blocks = service.list()?;

    if output.is_json() {
        return output.json(&blocks);
    }

    if blocks.is_empty() {
        output.info("No link blocks yet. Create one with 'linklist save'.")?;
        return Ok(());
    }

    let Some(first) = service.languages().first() else {
        return Ok(());
    };

    output.header("Link blocks:")?;
    for block in &blocks {
        output.print(&row(block, first.id_lang))?;
    }
    Ok(())
}

/// `  #<id>  hook <id_hook>  <name in first language>`
fn row(block: &LinkBlock, id_lang: LanguageId) -> String {
    let id = block
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".into());
    let name = block.name.get(id_lang).unwrap_or("-");
    format!("  #{id:<4} hook {:<4} {name}", block.id_hook.to_string())
}
