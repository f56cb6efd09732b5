//! Flags accepted by every `linklist` subcommand.
//!
//! Flattened into [`super::Cli`]. Each flag here either shapes how results
//! are rendered or overrides one setting from the loaded configuration.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of what the service does. Repeatable.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more detail (-v, -vv, -vvv)",
        long_help = "Log more detail to stderr:
    (none)  - failed hook registrations and cache clears
    -v      - saved and deleted blocks, new hook registrations
    -vv     - validation outcomes, repository writes, cache clears
    -vvv    - everything, including span entry and exit"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal. JSON documents are still written.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file layered over the defaults; must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Link block store to use instead of `storage.data_file`.
    #[arg(
        long = "data-file",
        global = true,
        value_name = "FILE",
        help = "Link block JSON store (overrides storage.data_file)"
    )]
    pub data_file: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How command results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fall back to `output.format`, then to colors when stdout is a terminal.
    #[default]
    Auto,
    /// Colored summaries.
    Human,
    /// Summaries without ANSI codes.
    Plain,
    /// Raw form-data and validation-error JSON.
    Json,
}

impl OutputFormat {
    /// Parse the `output.format` config value. Unknown values mean `Auto`.
    pub fn from_config(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "human" => Self::Human,
            "plain" => Self::Plain,
            "json" => Self::Json,
            _ => Self::Auto,
        }
    }
}
