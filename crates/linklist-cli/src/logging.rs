//! Tracing subscriber for the `linklist` binary.
//!
//! The core and adapter crates only emit events; this is the one place a
//! subscriber is installed. Events go to stderr so `--output-format json`
//! keeps stdout a clean JSON document.
//!
//! What each level shows:
//!
//! | Flag      | Level | Link List events                                   |
//! |-----------|-------|----------------------------------------------------|
//! | `--quiet` | error | configuration failures                             |
//! | (none)    | warn  | hook registration or cache clear failed after save |
//! | `-v`      | info  | block saved or deleted, module registered on hook  |
//! | `-vv`     | debug | validation outcome, repository write, cache clear  |
//! | `-vvv`    | trace | all of the above plus span enter/exit              |
//!
//! A set `RUST_LOG` replaces these directives entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events the default filter lets through. Dependencies such as
/// `config` stay silent unless `RUST_LOG` asks for them.
const LINKLIST_TARGETS: [&str; 3] = ["linklist", "linklist_core", "linklist_adapters"];

/// Install the global subscriber. Call once, before any event fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `EnvFilter` directives enabling `level` for every Link List crate only.
fn directives(level: &str) -> String {
    LINKLIST_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            data_file: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_counts_map_to_levels() {
        let levels: Vec<&str> = (0..=4).map(|v| level_for(&args(v, false))).collect();
        assert_eq!(levels, vec!["warn", "info", "debug", "trace", "trace"]);
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(&args(0, true)), "error");
        assert_eq!(level_for(&args(2, true)), "error");
    }

    #[test]
    fn directives_cover_every_linklist_crate() {
        assert_eq!(
            directives("debug"),
            "linklist=debug,linklist_core=debug,linklist_adapters=debug"
        );
    }

    #[test]
    fn directives_parse_as_a_filter() {
        assert!(EnvFilter::try_new(directives("info")).is_ok());
    }
}
