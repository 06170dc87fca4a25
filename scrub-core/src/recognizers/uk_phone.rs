//! UK phone number recognizer. Always registered, independent of configuration.
//!
//! Covers `07xxx xxxxxx` mobiles, `01xx`/`02x` landlines and `+44` international forms,
//! with optional spaces, dashes and parentheses between the groups.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::Result;
use crate::recognizers::pattern::{Pattern, PatternRecognizer};

pub const UK_PHONE_NUMBER: &str = "UK_PHONE_NUMBER";

/// `(name, regex, score)` for each built-in phone pattern.
const UK_PHONE_PATTERNS: [(&str, &str, f64); 3] = [
    (
        "uk_mobile",
        r"(?:\+44[\s-]?7\d{3}|\(07\d{3}\)|\b07\d{3})[\s-]?\d{3}[\s-]?\d{3}\b",
        0.85,
    ),
    (
        "uk_landline",
        r"(?:\+44[\s-]?[12]\d{1,3}|\(0[12]\d{1,3}\)|\b0[12]\d{1,3})[\s-]?\d{3,4}[\s-]?\d{4}\b",
        0.85,
    ),
    (
        "uk_phone_with_plus",
        r"\+44[\s-]?\(?\d{2,4}\)?[\s-]?\d{3,4}[\s-]?\d{4}\b",
        0.90,
    ),
];

pub fn uk_phone_recognizer() -> Result<PatternRecognizer> {
    let patterns = UK_PHONE_PATTERNS
        .iter()
        .map(|(name, regex, score)| Pattern::new(*name, *regex, *score))
        .collect();
    PatternRecognizer::new("uk_phone", UK_PHONE_NUMBER, patterns)
}
