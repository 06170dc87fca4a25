// scrub/src/cli.rs
//! Command-line interface definition for the `scrub` binary.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "scrub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip PII and corporate information from your clipboard or stdin",
    long_about = "Scrub reads text from the system clipboard, replaces UK phone numbers, company and project names, internal URLs and deny-listed terms with type labels such as <UK_PHONE_NUMBER>, and writes the result back. Corporate terms come from a YAML configuration file (default: ~/.config/scrub/config.yaml).",
    after_help = "Examples:\n  scrub                    Scrub the clipboard in place\n  scrub --dry-run          Show what would be redacted\n  scrub --stdin < in.txt   Read stdin, write scrubbed text to stdout\n  scrub --init-config      Create an example config file"
)]
pub struct Cli {
    /// Read from stdin and write to stdout instead of using the clipboard.
    #[arg(long, help = "Read from stdin instead of the clipboard; write the result to stdout.")]
    pub stdin: bool,

    /// Report findings without modifying anything.
    #[arg(long = "dry-run", help = "Show what would be redacted without modifying the clipboard.")]
    pub dry_run: bool,

    /// Print dry-run findings as JSON on stdout.
    #[arg(long, requires = "dry_run", help = "With --dry-run, print the findings as a JSON array on stdout.")]
    pub json: bool,

    /// Path to a configuration file. Must exist when given.
    #[arg(long, short = 'c', value_name = "FILE", help = "Path to a YAML configuration file (default: ~/.config/scrub/config.yaml).")]
    pub config: Option<PathBuf>,

    /// Write the example configuration to the default path and exit.
    #[arg(long = "init-config", conflicts_with_all = ["stdin", "dry_run", "config"], help = "Create an example configuration file at the default path.")]
    pub init_config: bool,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress informational messages and logging.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_requires_dry_run() {
        assert!(Cli::try_parse_from(["scrub", "--json"]).is_err());
        let cli = Cli::try_parse_from(["scrub", "--stdin", "--dry-run", "--json"]).unwrap();
        assert!(cli.stdin && cli.dry_run && cli.json);
    }

    #[test]
    fn test_init_config_is_exclusive() {
        assert!(Cli::try_parse_from(["scrub", "--init-config", "--stdin"]).is_err());
        assert!(Cli::try_parse_from(["scrub", "--init-config"]).unwrap().init_config);
    }
}
