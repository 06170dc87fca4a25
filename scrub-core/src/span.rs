// scrub-core/src/span.rs
//! Span records produced by recognizers and consumed by the resolver and anonymizer,
//! plus the PII-safe debug logging helpers used wherever matched text is logged.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Set once from `SCRUB_ALLOW_DEBUG_PII`; when false, matched text never reaches the logs.
static PII_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("SCRUB_ALLOW_DEBUG_PII")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// A single match proposed by a recognizer, or selected by the resolver.
///
/// Offsets are byte offsets into the original UTF-8 text: `start` is inclusive,
/// `end` exclusive, and both always fall on `char` boundaries for spans produced
/// by this crate's recognizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    /// Category label, also used verbatim inside the `<...>` replacement.
    pub entity_type: String,
    /// Confidence in `[0, 1]`.
    pub score: f64,
    /// Name of the recognizer that proposed this span.
    pub source: String,
}

/// An unresolved, possibly overlapping match.
pub type CandidateSpan = Span;

/// A match selected for redaction. A sequence of these is sorted by `start` and
/// mutually non-overlapping.
pub type ResolvedSpan = Span;

impl Span {
    pub fn new(
        start: usize,
        end: usize,
        entity_type: impl Into<String>,
        score: f64,
        source: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            entity_type: entity_type.into(),
            score,
            source: source.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// The slice of `text` covered by this span, if the offsets are valid for it.
    pub fn matched<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.start..self.end)
    }

    /// The placeholder that replaces this span's text, e.g. `<UK_PHONE_NUMBER>`.
    pub fn label(&self) -> String {
        format_label(&self.entity_type)
    }
}

pub fn format_label(entity_type: &str) -> String {
    format!("<{}>", entity_type)
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_candidate_debug(module_path: &str, pattern_name: &str, entity_type: &str, matched: &str) {
    debug!(
        "{} Candidate from pattern '{}' as {}: '{}'",
        module_path,
        pattern_name,
        entity_type,
        get_loggable_content(matched)
    );
}

pub fn log_redaction_action_debug(module_path: &str, original: &str, label: &str) {
    debug!(
        "{} Redaction action: Original='{}', Redacted='{}'",
        module_path,
        get_loggable_content(original),
        label
    );
}
