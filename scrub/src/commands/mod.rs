// scrub/src/commands/mod.rs
//! Command dispatch: decides between `--init-config` and a scrub run, and resolves which
//! configuration file applies.

pub mod init_config;
pub mod scrub;

use anyhow::{bail, Context, Result};
use log::debug;

use scrub_core::{ScrubConfig, TextScrubber};

use crate::cli::Cli;
use crate::ui::output_format::warn_msg;
use crate::utils::paths::default_config_path;
use self::scrub::{InputSource, ScrubOptions};

/// Runs the action selected by `cli`.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.init_config {
        let path = default_config_path().context("Could not determine the home directory")?;
        return init_config::run_init_config(&path, cli.quiet);
    }

    let config = load_config(cli)?;
    let scrubber = TextScrubber::new(&config.corporate).context("Failed to build recognizers")?;
    debug!("Active recognizers: {:?}", scrubber.registry().recognizer_names());

    let opts = ScrubOptions {
        source: if cli.stdin { InputSource::Stdin } else { InputSource::Clipboard },
        dry_run: cli.dry_run,
        json: cli.json,
        quiet: cli.quiet,
    };
    scrub::run_scrub(&scrubber, &opts)
}

/// An explicit `--config` must exist. Otherwise the default path is used when present.
fn load_config(cli: &Cli) -> Result<ScrubConfig> {
    if let Some(path) = &cli.config {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        let config = ScrubConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        if config.corporate.is_empty() && !cli.quiet {
            warn_msg(format!(
                "{} defines no corporate terms; only UK phone numbers will be redacted.",
                path.display()
            ));
        }
        return Ok(config);
    }

    match default_config_path() {
        Some(path) => ScrubConfig::load_or_default(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            debug!("No home directory; running without corporate terms.");
            Ok(ScrubConfig::default())
        }
    }
}
