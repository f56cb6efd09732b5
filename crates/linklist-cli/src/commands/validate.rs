//! `linklist validate` - run the form rules without saving.

use crate::{
    cli::ValidateArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let submission = super::read_submission(args.file.as_ref())?;
    let errors = super::build_service(&config)?.validate(&submission);

    if !errors.is_empty() {
        return super::reject(errors, &output);
    }

    if output.is_json() {
        return output.json(&errors);
    }
    output.success("Submission is valid")?;
    Ok(())
}
