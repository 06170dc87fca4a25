// scrub/src/commands/scrub.rs
//! The scrub run: read input, redact or report, write output.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use is_terminal::IsTerminal;
use std::io::{self, Read, Write};

use scrub_core::{ResolvedSpan, TextScrubber};

use crate::ui::output_format::{self, info_msg};
use crate::utils::clipboard::{read_clipboard, write_clipboard};

/// Where the text comes from and where the scrubbed text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Clipboard,
    Stdin,
}

#[derive(Debug, Clone)]
pub struct ScrubOptions {
    pub source: InputSource,
    pub dry_run: bool,
    pub json: bool,
    pub quiet: bool,
}

/// One dry-run finding, as printed by `--dry-run --json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding<'a> {
    pub entity_type: &'a str,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    pub score: f64,
    pub source: &'a str,
}

/// The main operation runner for the scrub CLI.
pub fn run_scrub(scrubber: &TextScrubber, opts: &ScrubOptions) -> Result<()> {
    info!("Starting scrub operation ({:?}).", opts.source);

    let input = match opts.source {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
        InputSource::Clipboard => read_clipboard().context("Error reading clipboard")?,
    };

    if input.trim().is_empty() {
        if let Some(notice) = empty_input_notice(opts) {
            info_msg(notice);
        }
        debug!("Input is empty; nothing to do.");
        return Ok(());
    }

    if opts.dry_run {
        let spans = scrubber.analyze(&input);
        if opts.json {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", findings_json(&input, &spans)?)?;
        } else {
            let supports_color = io::stderr().is_terminal();
            output_format::print_findings(&mut io::stderr(), &input, &spans, supports_color)?;
        }
        return Ok(());
    }

    let result = scrubber.scrub(&input);
    debug!(
        "Redacted {} span(s). Original length: {}, scrubbed length: {}",
        result.applied_spans.len(),
        input.len(),
        result.text.len()
    );

    match opts.source {
        InputSource::Stdin => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", result.text)?;
        }
        InputSource::Clipboard => {
            write_clipboard(&result.text).context("Error writing to clipboard")?;
            if !opts.quiet {
                info_msg(format!(
                    "Clipboard scrubbed: {} item(s) redacted.",
                    result.applied_spans.len()
                ));
            }
        }
    }

    info!("Scrub operation completed.");
    Ok(())
}

/// The notice printed for empty input: clipboard mode only, and never with `--quiet`.
pub fn empty_input_notice(opts: &ScrubOptions) -> Option<&'static str> {
    (opts.source == InputSource::Clipboard && !opts.quiet).then_some("Clipboard is empty.")
}

/// Pairs each span with the text it covers.
pub fn findings<'a>(text: &'a str, spans: &'a [ResolvedSpan]) -> Vec<Finding<'a>> {
    spans
        .iter()
        .filter_map(|span| {
            span.matched(text).map(|matched| Finding {
                entity_type: &span.entity_type,
                text: matched,
                start: span.start,
                end: span.end,
                score: span.score,
                source: &span.source,
            })
        })
        .collect()
}

/// Renders the findings as a pretty-printed JSON array.
pub fn findings_json(text: &str, spans: &[ResolvedSpan]) -> Result<String> {
    serde_json::to_string_pretty(&findings(text, spans)).context("Failed to serialize findings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrub_core::RecognizerConfig;

    fn scrubber() -> TextScrubber {
        let config = RecognizerConfig {
            project_names: vec!["Project Phoenix".into()],
            ..Default::default()
        };
        TextScrubber::new(&config).unwrap()
    }

    #[test]
    fn test_findings_carry_matched_text() {
        let text = "call 07911 123456 about Project Phoenix";
        let spans = scrubber().analyze(text);
        let found = findings(text, &spans);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].entity_type, "UK_PHONE_NUMBER");
        assert_eq!(found[0].text, "07911 123456");
        assert_eq!(found[1].entity_type, "PROJECT_NAME");
        assert_eq!(found[1].text, "Project Phoenix");
    }

    #[test]
    fn test_findings_json_shape() {
        let text = "Project Phoenix";
        let spans = scrubber().analyze(text);
        let json: serde_json::Value = serde_json::from_str(&findings_json(text, &spans).unwrap()).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["entity_type"], "PROJECT_NAME");
        assert_eq!(items[0]["text"], "Project Phoenix");
        assert_eq!(items[0]["start"], 0);
        assert_eq!(items[0]["end"], 15);
        assert_eq!(items[0]["source"], "project_name");
    }

    #[test]
    fn test_no_findings_is_empty_json_array() {
        assert_eq!(findings_json("nothing here", &[]).unwrap(), "[]");
    }

    fn options(source: InputSource, quiet: bool) -> ScrubOptions {
        ScrubOptions {
            source,
            dry_run: false,
            json: false,
            quiet,
        }
    }

    #[test]
    fn test_empty_clipboard_notice_respects_quiet() {
        assert_eq!(
            empty_input_notice(&options(InputSource::Clipboard, false)),
            Some("Clipboard is empty.")
        );
        assert_eq!(empty_input_notice(&options(InputSource::Clipboard, true)), None);
        assert_eq!(empty_input_notice(&options(InputSource::Stdin, false)), None);
    }
}
