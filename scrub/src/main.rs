// scrub/src/main.rs
//! Scrub entry point.
//!
//! Parses arguments, installs the logger and hands off to [`scrub::run`]. Any error is
//! reported as `Error: ...` on stderr with exit code 1.

use clap::Parser;
use log::LevelFilter;

use scrub::cli::Cli;
use scrub::ui::output_format;
use scrub::{logger, run};

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        Some(LevelFilter::Debug)
    } else if cli.quiet {
        Some(LevelFilter::Off)
    } else {
        None
    };
    logger::init_logger(level);

    if let Err(e) = run(&cli) {
        output_format::error_msg(format!("{:#}", e));
        std::process::exit(1);
    }
}
