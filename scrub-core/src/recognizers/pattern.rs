//! pattern.rs - Compilation of `Pattern`s and the generic `PatternRecognizer`.
//!
//! Every built-in recognizer is a `PatternRecognizer`: an entity type plus an ordered list
//! of case-insensitive regular expressions, each with a fixed score. Compilation happens
//! once, at construction; all failures of one recognizer are collected and reported
//! together so a bad configuration is rejected before any scan runs.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::{Result, ScrubError};
use crate::recognizer::Recognizer;
use crate::span::{log_candidate_debug, CandidateSpan, Span};

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 1024;

/// Compiled-size ceiling handed to the regex engine.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// An uncompiled pattern definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Identifier used in logs and error messages (e.g. `uk_mobile`).
    pub name: String,
    /// The regular expression source.
    pub regex: String,
    /// Confidence assigned to every match of this pattern.
    pub score: f64,
}

impl Pattern {
    pub fn new(name: impl Into<String>, regex: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            regex: regex.into(),
            score,
        }
    }
}

/// A single compiled pattern, ready for matching.
#[derive(Debug)]
pub struct CompiledPattern {
    pub name: String,
    pub regex: Regex,
    pub score: f64,
}

/// Compiles one pattern, enforcing the length and score constraints.
pub fn compile_pattern(pattern: Pattern) -> Result<CompiledPattern> {
    compile_with_limit(pattern, Some(MAX_PATTERN_LENGTH))
}

/// `max_length: None` leaves `REGEX_SIZE_LIMIT` as the only size guard.
fn compile_with_limit(pattern: Pattern, max_length: Option<usize>) -> Result<CompiledPattern> {
    if !(0.0..=1.0).contains(&pattern.score) {
        return Err(ScrubError::InvalidScore(pattern.name, pattern.score));
    }

    if let Some(max) = max_length.filter(|max| pattern.regex.len() > *max) {
        return Err(ScrubError::PatternLengthExceeded(
            pattern.name,
            pattern.regex.len(),
            max,
        ));
    }

    let regex = RegexBuilder::new(&pattern.regex)
        .case_insensitive(true)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| ScrubError::PatternCompilationError(pattern.name.clone(), e))?;

    debug!(
        target: "scrub_core::recognizers",
        "Pattern '{}' compiled successfully.",
        &pattern.name
    );

    Ok(CompiledPattern {
        name: pattern.name,
        regex,
        score: pattern.score,
    })
}

/// A recognizer driven entirely by a list of regular expressions.
#[derive(Debug)]
pub struct PatternRecognizer {
    name: String,
    entity_type: String,
    patterns: Vec<CompiledPattern>,
}

impl PatternRecognizer {
    /// Compiles `patterns` and builds the recognizer.
    ///
    /// Fails with `RecognizerBuildError` listing every pattern that could not be compiled.
    pub fn new(
        name: impl Into<String>,
        entity_type: impl Into<String>,
        patterns: Vec<Pattern>,
    ) -> Result<Self> {
        Self::build(name.into(), entity_type.into(), patterns, Some(MAX_PATTERN_LENGTH))
    }

    /// Like [`PatternRecognizer::new`], for patterns this crate assembled around
    /// `regex::escape`d configuration terms.
    ///
    /// Escaping can more than double a term's length, so `MAX_PATTERN_LENGTH` is not applied;
    /// the compiled-size limit still is.
    pub fn from_escaped_literals(
        name: impl Into<String>,
        entity_type: impl Into<String>,
        patterns: Vec<Pattern>,
    ) -> Result<Self> {
        Self::build(name.into(), entity_type.into(), patterns, None)
    }

    fn build(
        name: String,
        entity_type: String,
        patterns: Vec<Pattern>,
        max_length: Option<usize>,
    ) -> Result<Self> {
        debug!(
            "Compiling {} pattern(s) for recognizer '{}' ({}).",
            patterns.len(),
            name,
            entity_type
        );

        let mut compiled = Vec::with_capacity(patterns.len());
        let mut errors = Vec::new();
        for pattern in patterns {
            match compile_with_limit(pattern, max_length) {
                Ok(p) => compiled.push(p),
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            let details = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<String>>()
                .join("\n");
            return Err(ScrubError::RecognizerBuildError(name, details));
        }

        Ok(Self {
            name,
            entity_type,
            patterns: compiled,
        })
    }

    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }
}

impl Recognizer for PatternRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn scan(&self, text: &str) -> Vec<CandidateSpan> {
        let mut spans = Vec::new();
        for pattern in &self.patterns {
            for m in pattern.regex.find_iter(text) {
                // Zero-width matches would produce an empty, unreplaceable span.
                if m.start() == m.end() {
                    continue;
                }
                log_candidate_debug(module_path!(), &pattern.name, &self.entity_type, m.as_str());
                spans.push(Span::new(
                    m.start(),
                    m.end(),
                    self.entity_type.as_str(),
                    pattern.score,
                    self.name.as_str(),
                ));
            }
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_is_case_insensitive() {
        let recognizer = PatternRecognizer::new(
            "test",
            "TEST",
            vec![Pattern::new("hello", r"\bhello\b", 0.5)],
        )
        .unwrap();

        let spans = recognizer.scan("Hello there, HELLO again");
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].start, spans[0].end), (0, 5));
        assert_eq!((spans[1].start, spans[1].end), (13, 18));
        assert!(spans.iter().all(|s| s.entity_type == "TEST" && s.source == "test"));
        assert!(spans.iter().all(|s| s.score == 0.5));
    }

    #[test]
    fn test_spans_follow_pattern_order() {
        let recognizer = PatternRecognizer::new(
            "multi",
            "MULTI",
            vec![
                Pattern::new("second_word", r"\bbeta\b", 0.7),
                Pattern::new("first_word", r"\balpha\b", 0.8),
            ],
        )
        .unwrap();

        let spans = recognizer.scan("alpha beta");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start, 6);
        assert_eq!(spans[0].score, 0.7);
        assert_eq!(spans[1].start, 0);
        assert_eq!(spans[1].score, 0.8);
    }

    #[test]
    fn test_zero_width_matches_are_ignored() {
        let recognizer =
            PatternRecognizer::new("empty", "EMPTY", vec![Pattern::new("boundary", r"\b", 0.5)])
                .unwrap();
        assert!(recognizer.scan("some words here").is_empty());
    }

    #[test]
    fn test_invalid_regex_fails_construction() {
        let err = PatternRecognizer::new(
            "broken",
            "BROKEN",
            vec![
                Pattern::new("ok", r"fine", 0.5),
                Pattern::new("unterminated", r"(abc", 0.5),
            ],
        )
        .unwrap_err();

        match err {
            ScrubError::RecognizerBuildError(name, details) => {
                assert_eq!(name, "broken");
                assert!(details.contains("unterminated"));
                assert!(!details.contains("'ok'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_score_out_of_range_is_rejected() {
        assert!(matches!(
            compile_pattern(Pattern::new("too_high", "x", 1.5)),
            Err(ScrubError::InvalidScore(_, _))
        ));
        assert!(matches!(
            compile_pattern(Pattern::new("nan", "x", f64::NAN)),
            Err(ScrubError::InvalidScore(_, _))
        ));
    }

    #[test]
    fn test_pattern_length_limit() {
        let long = "a".repeat(MAX_PATTERN_LENGTH + 1);
        assert!(matches!(
            compile_pattern(Pattern::new("long", long, 0.5)),
            Err(ScrubError::PatternLengthExceeded(_, len, max)) if len == MAX_PATTERN_LENGTH + 1 && max == MAX_PATTERN_LENGTH
        ));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let recognizer =
            PatternRecognizer::new("t", "T", vec![Pattern::new("any", r"\w+", 0.5)]).unwrap();
        assert!(recognizer.scan("").is_empty());
    }

    #[test]
    fn test_escaped_literals_skip_source_length_limit() {
        let term = format!("{}a", "a.".repeat(400));
        let regex = format!(r"\b{}\b", regex::escape(&term));
        assert!(regex.len() > MAX_PATTERN_LENGTH);

        let strict = PatternRecognizer::new("t", "T", vec![Pattern::new("long", regex.clone(), 1.0)]);
        assert!(strict.is_err());

        let recognizer =
            PatternRecognizer::from_escaped_literals("t", "T", vec![Pattern::new("long", regex, 1.0)])
                .unwrap();
        let text = format!("x {} y", term);
        let spans = recognizer.scan(&text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], term);
    }
}
