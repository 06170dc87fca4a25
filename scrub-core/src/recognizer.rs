// scrub-core/src/recognizer.rs
//! Defines the `Recognizer` trait, the seam between the registry and anything that can
//! propose sensitive spans.
//!
//! The built-in recognizers are all regex-driven `PatternRecognizer`s, but the registry
//! accepts any implementation, so an external detector (for example a named-entity model)
//! plugs in by producing the same `CandidateSpan` records.
//!
//! License: MIT OR APACHE 2.0

use crate::span::CandidateSpan;

/// A component that scans text and proposes candidate spans.
///
/// Implementations must be stateless with respect to `scan`: the same recognizer is
/// shared across threads and may scan several texts concurrently.
pub trait Recognizer: Send + Sync {
    /// Stable identifier, recorded as `source` on every span this recognizer emits.
    fn name(&self) -> &str;

    /// The entity type label this recognizer assigns.
    fn entity_type(&self) -> &str;

    /// Scans the full text and returns every candidate span found.
    ///
    /// Spans must satisfy `start < end <= text.len()`. Overlaps are allowed; resolving
    /// them is the resolver's job.
    fn scan(&self, text: &str) -> Vec<CandidateSpan>;
}
