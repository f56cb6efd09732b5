//! `linklist save` - validate a submission and persist it.
//!
//! Creates a block unless `--id` names an existing one. Validation errors
//! are reported together and nothing is written.

use serde_json::json;
use tracing::{info, instrument};

use linklist_core::{application::SaveOutcome, domain::FormTarget};

use crate::{
    cli::SaveArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(id = ?args.id))]
pub fn execute(args: SaveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let submission = super::read_submission(args.file.as_ref())?;
    let id_hook = submission.id_hook;
    let service = super::build_service(&config)?;
    let target = FormTarget::from(args.id);

    match service.save(target, submission)? {
        SaveOutcome::Invalid(errors) => super::reject(errors, &output),
        SaveOutcome::Saved {
            id,
            hook_registered,
        } => {
            info!(id_link_block = %id, "Saved from CLI");

            if output.is_json() {
                return output.json(&json!({
                    "id_link_block": id,
                    "hook_registered": hook_registered,
                }));
            }

            let verb = if target.is_unset() { "created" } else { "updated" };
            output.success(&format!("Link block #{id} {verb}"))?;
            if let (true, Some(id_hook)) = (hook_registered, id_hook) {
                output.info(&format!(
                    "{} registered on hook {}",
                    config.module.name, id_hook
                ))?;
            }
            Ok(())
        }
    }
}
