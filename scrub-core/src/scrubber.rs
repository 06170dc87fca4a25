// File: scrub-core/src/scrubber.rs

//! `scrubber.rs`
//! The scan → resolve → apply pipeline behind one type.
//!
//! `TextScrubber` owns a built [`Registry`] and is what front ends hold on to.
//! [`scrub_text`] is the one-shot convenience for callers that only redact a single text.

use log::debug;

use crate::anonymizer::{apply, RedactionResult};
use crate::config::RecognizerConfig;
use crate::errors::Result;
use crate::registry::Registry;
use crate::resolver::resolve;
use crate::span::ResolvedSpan;

#[derive(Debug)]
pub struct TextScrubber {
    registry: Registry,
}

impl TextScrubber {
    /// Builds the recognizer registry for `config`. Fails if any pattern cannot be compiled.
    pub fn new(config: &RecognizerConfig) -> Result<Self> {
        Ok(Self::with_registry(Registry::build(config)?))
    }

    /// Wraps an already built registry, e.g. one extended with external recognizers.
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Scans and resolves without rewriting: the spans that `scrub` would replace.
    pub fn analyze(&self, text: &str) -> Vec<ResolvedSpan> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let candidates = self.registry.scan(text);
        debug!("Collected {} candidate span(s).", candidates.len());
        resolve(candidates)
    }

    /// Runs the full pipeline and returns the redacted text with the applied spans.
    pub fn scrub<'a>(&self, text: &'a str) -> RedactionResult<'a> {
        let spans = self.analyze(text);
        apply(text, &spans)
    }
}

/// Redacts `text` in one call, building a throwaway scrubber from `config`.
///
/// # Arguments
///
/// * `text` - The text to redact.
/// * `config` - The four term lists; an empty config still redacts UK phone numbers.
pub fn scrub_text(text: &str, config: &RecognizerConfig) -> Result<String> {
    let scrubber = TextScrubber::new(config)?;
    Ok(scrubber.scrub(text).into_text())
}
