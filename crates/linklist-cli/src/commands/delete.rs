//! `linklist delete` - remove a link block.

use tracing::instrument;

use crate::{
    cli::DeleteArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(args: DeleteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    super::build_service(&config)?.delete(args.id)?;

    if output.is_json() {
        return output.json(&serde_json::json!({ "deleted": args.id }));
    }
    output.success(&format!("Link block #{} deleted", args.id))?;
    Ok(())
}
