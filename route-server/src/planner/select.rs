//! Itinerary selection.

use crate::domain::Itinerary;

/// Pick the fastest itinerary from a candidate list.
///
/// Candidates without a total time are ignored. Ties break by stable input
/// order: the first candidate with the minimum total time wins. This is a
/// documented, deterministic rule, not an accident of collection order
/// (`min_by_key` returns the first of several equal minima).
///
/// Returns `None` when no candidate carries a usable total time — the
/// caller then proceeds to pedestrian fallback.
pub fn fastest(candidates: &[Itinerary]) -> Option<&Itinerary> {
    candidates
        .iter()
        .filter(|c| c.total_time.is_some())
        .min_by_key(|c| c.total_time.unwrap_or(u32::MAX))
}
