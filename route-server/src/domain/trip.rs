//! Resolved trip types: segments, skips, and the trip summary.

use serde::Serialize;

use super::{Itinerary, Leg, RouteSource, Waypoint};

/// The resolved connection between two consecutive waypoints.
///
/// Exactly one chosen itinerary per segment, flattened onto the segment:
/// `total_*` fields come from the winning (or synthesized) itinerary.
///
/// # Invariants
///
/// - `sequence` is 1-based and equals the waypoint-pair index + 1.
/// - Segment *i* always connects `waypoints[i]` to `waypoints[i+1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// 1-based position in traversal order.
    pub sequence: u32,

    /// Waypoint this segment departs from.
    pub from: Waypoint,

    /// Waypoint this segment arrives at.
    pub to: Waypoint,

    /// Chosen itinerary total duration in seconds.
    pub total_time: u32,

    /// Chosen itinerary total distance in metres.
    pub total_distance: u32,

    /// Chosen itinerary total fare.
    pub total_fare: u32,

    /// Chosen itinerary walking time in seconds.
    pub total_walk_time: u32,

    /// Chosen itinerary transfer count.
    pub transfer_count: u32,

    /// Normalized legs of the chosen itinerary, in travel order.
    pub legs: Vec<Leg>,

    /// Whether this segment came from transit or the pedestrian fallback.
    pub source: RouteSource,
}

impl Segment {
    /// Build a segment from a chosen itinerary.
    ///
    /// `sequence` is the 1-based traversal position. The itinerary's
    /// `total_time` defaults to 0 if absent, though selection and fallback
    /// both guarantee a usable time in practice.
    pub fn from_itinerary(sequence: u32, from: Waypoint, to: Waypoint, itinerary: Itinerary) -> Self {
        Self {
            sequence,
            from,
            to,
            total_time: itinerary.total_time.unwrap_or(0),
            total_distance: itinerary.total_distance,
            total_fare: itinerary.fare,
            total_walk_time: itinerary.total_walk_time,
            transfer_count: itinerary.transfer_count,
            legs: itinerary.legs,
            source: itinerary.source,
        }
    }
}

/// Record of a segment that was skipped because a waypoint had no
/// coordinates. Distinct from segment failure: skips never abort the trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedSegment {
    /// 1-based traversal position the segment would have had.
    pub sequence: u32,

    /// Name of the departing waypoint.
    pub from_name: String,

    /// Name of the arriving waypoint.
    pub to_name: String,

    /// Why the segment was skipped.
    pub reason: String,
}

/// Aggregate metrics across all resolved segments of a trip.
///
/// Numeric fields are exact sums of the corresponding per-segment fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripSummary {
    /// Sum of segment durations in seconds.
    pub total_time: u32,

    /// Sum of segment distances in metres.
    pub total_distance: u32,

    /// Sum of segment fares.
    pub total_fare: u32,

    /// Sum of segment walking times in seconds.
    pub total_walk_time: u32,

    /// Sum of segment transfer counts.
    pub total_transfer_count: u32,

    /// Number of resolved segments.
    pub segment_count: u32,

    /// First waypoint's name once, then one name per resolved segment.
    pub waypoint_names: Vec<String>,
}

impl TripSummary {
    /// Fold one resolved segment into the summary.
    ///
    /// Must be called in sequence order; the first call also records the
    /// segment's `from` name.
    pub fn accumulate(&mut self, segment: &Segment) {
        self.total_time += segment.total_time;
        self.total_distance += segment.total_distance;
        self.total_fare += segment.total_fare;
        self.total_walk_time += segment.total_walk_time;
        self.total_transfer_count += segment.transfer_count;
        self.segment_count += 1;

        if self.waypoint_names.is_empty() {
            self.waypoint_names.push(segment.from.name.clone());
        }
        self.waypoint_names.push(segment.to.name.clone());
    }
}

/// A fully aggregated trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    /// Resolved segments, ordered by `sequence` strictly increasing from 1.
    pub segments: Vec<Segment>,

    /// Segments skipped due to missing waypoint coordinates.
    pub skipped: Vec<SkippedSegment>,

    /// Aggregate metrics.
    pub summary: TripSummary,
}
