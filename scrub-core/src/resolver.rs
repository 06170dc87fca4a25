// scrub-core/src/resolver.rs
//! Merges candidate spans from every recognizer into one non-overlapping, ordered set.
//!
//! Greedy, highest confidence first: candidates are ranked by score, then by length, then
//! by position, and each is kept only if it does not overlap anything already kept. The
//! ranking is a total order over distinct candidates, so the result never depends on the
//! order in which recognizers were registered.
//!
//! License: MIT OR APACHE 2.0

use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::debug;

use crate::span::{CandidateSpan, ResolvedSpan};

/// Ranking used to pick winners: higher score, then longer, then earlier.
///
/// The trailing keys only break ties between candidates that agree on all three.
fn rank(a: &CandidateSpan, b: &CandidateSpan) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.len().cmp(&a.len()))
        .then_with(|| a.start.cmp(&b.start))
        .then_with(|| a.end.cmp(&b.end))
        .then_with(|| a.entity_type.cmp(&b.entity_type))
        .then_with(|| a.source.cmp(&b.source))
}

pub fn resolve(mut candidates: Vec<CandidateSpan>) -> Vec<ResolvedSpan> {
    let total = candidates.len();
    candidates.sort_by(rank);

    // Accepted spans keyed by start. They are disjoint and non-empty, so starts are unique
    // and the only kept span that can overlap a candidate is the last one starting before
    // the candidate's end.
    let mut accepted: BTreeMap<usize, ResolvedSpan> = BTreeMap::new();
    for candidate in candidates {
        if candidate.is_empty() {
            continue;
        }
        let blocked = accepted
            .range(..candidate.end)
            .next_back()
            .is_some_and(|(_, kept)| kept.end > candidate.start);
        if blocked {
            continue;
        }
        accepted.insert(candidate.start, candidate);
    }

    debug!("Resolved {} candidate(s) into {} span(s).", total, accepted.len());
    accepted.into_values().collect()
}
