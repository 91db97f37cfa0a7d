//! Candidate itineraries.

use serde::Serialize;

use super::Leg;

/// How an itinerary was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RouteSource {
    /// Chosen from the transit provider's candidates.
    Transit,

    /// Synthesized from the pedestrian provider after transit was
    /// unavailable. Distinct from a transit itinerary that happens to be
    /// all walking.
    PedestrianFallback,
}

/// One full candidate route between two points: ordered legs plus
/// aggregate metrics.
///
/// `total_time` is `None` when the provider omitted it; selection only
/// considers candidates with a usable total time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    /// Total duration in seconds, if the provider reported one.
    pub total_time: Option<u32>,

    /// Total distance in metres.
    pub total_distance: u32,

    /// Total walking time in seconds.
    pub total_walk_time: u32,

    /// Number of transfers.
    pub transfer_count: u32,

    /// Total fare (regular adult), provider currency units.
    pub fare: u32,

    /// Legs in travel order.
    pub legs: Vec<Leg>,

    /// Where this itinerary came from.
    pub source: RouteSource,
}
