//! Literal-term recognizers: corporate names, project names and deny-list entries.
//!
//! All three share one builder. Each configured term becomes `\b<escaped term>\b`, so
//! `Acme` never fires inside `Academics` and a multi-word term only matches across the
//! same literal spacing. The entity type is a constructor argument, never patched in
//! after the fact.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use log::debug;

use crate::errors::Result;
use crate::recognizers::pattern::{Pattern, PatternRecognizer};

pub const CORPORATE_NAME: &str = "CORPORATE_NAME";
pub const PROJECT_NAME: &str = "PROJECT_NAME";
pub const DENY_LIST: &str = "DENY_LIST";

pub const CORPORATE_SCORE: f64 = 0.9;
pub const PROJECT_SCORE: f64 = 0.9;
pub const DENY_LIST_SCORE: f64 = 1.0;

/// Trims terms and drops the empty, whitespace-only and duplicate ones.
///
/// An empty term would compile to `\b\b` and match a zero-width boundary everywhere, so
/// every term-driven recognizer passes its list through here first.
pub fn usable_terms<S: AsRef<str>>(terms: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut usable = Vec::with_capacity(terms.len());
    for term in terms {
        let trimmed = term.as_ref().trim();
        if trimmed.is_empty() {
            debug!("Skipping empty or whitespace-only term.");
            continue;
        }
        if seen.insert(trimmed) {
            usable.push(trimmed);
        }
    }
    usable
}

/// `\b<escaped>\b` for a single literal term.
pub fn literal_term_regex(term: &str) -> String {
    format!(r"\b{}\b", regex::escape(term))
}

/// Builds a recognizer matching each term literally, with word boundaries on both sides.
///
/// Pattern names are `<prefix>_<index>` so that the terms themselves stay out of logs.
pub fn literal_term_recognizer<S: AsRef<str>>(
    name: &str,
    entity_type: &str,
    terms: &[S],
    score: f64,
) -> Result<PatternRecognizer> {
    let patterns = usable_terms(terms)
        .into_iter()
        .enumerate()
        .map(|(i, term)| Pattern::new(format!("{}_{}", name, i), literal_term_regex(term), score))
        .collect();
    PatternRecognizer::from_escaped_literals(name, entity_type, patterns)
}

pub fn corporate_name_recognizer<S: AsRef<str>>(company_names: &[S]) -> Result<PatternRecognizer> {
    literal_term_recognizer("corporate_name", CORPORATE_NAME, company_names, CORPORATE_SCORE)
}

pub fn project_name_recognizer<S: AsRef<str>>(project_names: &[S]) -> Result<PatternRecognizer> {
    literal_term_recognizer("project_name", PROJECT_NAME, project_names, PROJECT_SCORE)
}

pub fn deny_list_recognizer<S: AsRef<str>>(deny_list: &[S]) -> Result<PatternRecognizer> {
    literal_term_recognizer("deny_list", DENY_LIST, deny_list, DENY_LIST_SCORE)
}
