// scrub-core/src/anonymizer.rs
//! Rewrites text by replacing resolved spans with `<ENTITY_TYPE>` labels.
//!
//! Resolved spans are sorted and disjoint, so replacement is a single forward pass over
//! the original text: copy the gap, emit the label, jump to the span's end. Offsets never
//! need recomputing because nothing before the cursor is revisited.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use log::warn;
use serde::Serialize;

use crate::span::{format_label, log_redaction_action_debug, ResolvedSpan};

/// Output of a redaction pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedactionResult<'a> {
    /// The redacted text. Borrows the input when nothing was replaced.
    pub text: Cow<'a, str>,
    /// The spans actually replaced, in text order. Offsets refer to the original text.
    pub applied_spans: Vec<ResolvedSpan>,
}

impl RedactionResult<'_> {
    pub fn is_unchanged(&self) -> bool {
        self.applied_spans.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text.into_owned()
    }
}

/// Replaces every span in `spans` with its label.
///
/// `spans` are expected to come from the resolver. A span that is out of bounds, not on a
/// `char` boundary, empty, or starting before the end of the previous replacement is
/// skipped with a warning and left out of `applied_spans`.
pub fn apply<'a>(text: &'a str, spans: &[ResolvedSpan]) -> RedactionResult<'a> {
    if spans.is_empty() {
        return RedactionResult {
            text: Cow::Borrowed(text),
            applied_spans: Vec::new(),
        };
    }

    let mut output = String::with_capacity(text.len());
    let mut applied = Vec::with_capacity(spans.len());
    let mut cursor = 0usize;

    for span in spans {
        let valid = span.start >= cursor
            && span.start < span.end
            && span.end <= text.len()
            && text.is_char_boundary(span.start)
            && text.is_char_boundary(span.end);
        if !valid {
            warn!(
                "Skipping span {}..{} ({}) from '{}': not applicable at cursor {} of {} bytes.",
                span.start,
                span.end,
                span.entity_type,
                span.source,
                cursor,
                text.len()
            );
            continue;
        }

        let label = format_label(&span.entity_type);
        log_redaction_action_debug(module_path!(), &text[span.start..span.end], &label);
        output.push_str(&text[cursor..span.start]);
        output.push_str(&label);
        cursor = span.end;
        applied.push(span.clone());
    }

    if applied.is_empty() {
        return RedactionResult {
            text: Cow::Borrowed(text),
            applied_spans: applied,
        };
    }

    output.push_str(&text[cursor..]);
    RedactionResult {
        text: Cow::Owned(output),
        applied_spans: applied,
    }
}
