//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use linklist_core::domain::LinkBlockId;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "linklist",
    bin_name = "linklist",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Manage footer link blocks",
    long_about = "Link List loads link blocks into their admin form shape, \
                  validates submitted forms for every configured language \
                  and saves them.",
    after_help = "EXAMPLES:\n\
        \x20 linklist save block.json\n\
        \x20 linklist save --id 3 block.json\n\
        \x20 linklist show 3 --output-format json\n\
        \x20 linklist completions bash > /usr/share/bash-completion/completions/linklist",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the form data of a link block.
    #[command(
        about = "Show a link block as form data",
        after_help = "EXAMPLES:\n\
            \x20 linklist show 1\n\
            \x20 linklist show 1 --output-format json"
    )]
    Show(ShowArgs),

    /// Validate and save a submitted form.
    #[command(
        about = "Save a link block from a form submission",
        after_help = "EXAMPLES:\n\
            \x20 linklist save block.json            # create\n\
            \x20 linklist save --id 3 block.json     # update block 3\n\
            \x20 cat block.json | linklist save      # read from stdin"
    )]
    Save(SaveArgs),

    /// Validate a submitted form without saving it.
    #[command(
        about = "Validate a form submission",
        after_help = "EXAMPLES:\n\
            \x20 linklist validate block.json"
    )]
    Validate(ValidateArgs),

    /// List stored link blocks.
    #[command(visible_alias = "ls", about = "List link blocks")]
    List,

    /// Delete a link block.
    #[command(visible_alias = "rm", about = "Delete a link block")]
    Delete(DeleteArgs),

    /// Print the configured languages.
    #[command(about = "List configured languages")]
    Languages,

    /// Initialise a Link List configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 linklist init           # platform config location\n\
            \x20 linklist init --local   # .linklist.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 linklist completions bash > ~/.local/share/bash-completion/completions/linklist\n\
            \x20 linklist completions zsh  > ~/.zfunc/_linklist\n\
            \x20 linklist completions fish > ~/.config/fish/completions/linklist.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Link List configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 linklist config get storage.data_file\n\
            \x20 linklist config list"
    )]
    Config(ConfigCommands),
}

// ── show / delete ─────────────────────────────────────────────────────────────

/// Arguments for `linklist show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Link block id.
    #[arg(value_name = "ID")]
    pub id: LinkBlockId,
}

/// Arguments for `linklist delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Link block id.
    #[arg(value_name = "ID")]
    pub id: LinkBlockId,
}

// ── save / validate ───────────────────────────────────────────────────────────

/// Arguments for `linklist save`.
#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Update this block instead of creating a new one.
    #[arg(long = "id", value_name = "ID", help = "Existing block to update")]
    pub id: Option<LinkBlockId>,

    /// Submission JSON (`{"link_block": {...}}`). Reads stdin when omitted.
    #[arg(value_name = "FILE", help = "Submission file (default: stdin)")]
    pub file: Option<PathBuf>,
}

/// Arguments for `linklist validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Submission JSON. Reads stdin when omitted.
    #[arg(value_name = "FILE", help = "Submission file (default: stdin)")]
    pub file: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `linklist init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.linklist.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `linklist completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `linklist config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `module.name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
