// scrub/src/ui/output_format.rs
//! Colored status messages and the dry-run findings report, written to stderr.
//!
//! Color is applied only when the target is a terminal; tests and pipes get plain text.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use scrub_core::ResolvedSpan;

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg)
    } else {
        writeln!(writer, "Warning: {}", msg)
    }
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg)
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

/// Prints `Found N item(s) to redact:` and one line per span, or the no-findings notice.
pub fn print_findings<W: Write>(
    writer: &mut W,
    text: &str,
    spans: &[ResolvedSpan],
    supports_color: bool,
) -> io::Result<()> {
    if spans.is_empty() {
        return writeln!(writer, "No PII or sensitive information detected.");
    }

    writeln!(writer, "Found {} item(s) to redact:", spans.len())?;
    for span in spans {
        let matched = span.matched(text).unwrap_or_default();
        if supports_color {
            writeln!(
                writer,
                "  - {}: '{}' (score: {:.2})",
                span.entity_type.magenta().bold(),
                matched.red(),
                span.score
            )?;
        } else {
            writeln!(
                writer,
                "  - {}: '{}' (score: {:.2})",
                span.entity_type, matched, span.score
            )?;
        }
    }
    Ok(())
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_info_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_warn_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), supports_color);
}
