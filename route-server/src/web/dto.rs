//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Leg, Place, RideLeg, RouteSource, Segment, SkippedSegment, Stop, Trip, TripSummary, WalkStep,
    Waypoint,
};

/// Default route type echoed back when the caller omits one.
const DEFAULT_ROUTE_TYPE: &str = "fastest";

/// Request to plan a route through ordered waypoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointRouteRequest {
    /// Waypoints in traversal order.
    pub waypoints: Vec<WaypointDto>,

    /// Requested route type; only "fastest" is currently offered.
    pub route_type: Option<String>,
}

/// One waypoint in a request.
#[derive(Debug, Deserialize)]
pub struct WaypointDto {
    /// Place name.
    pub name: String,

    /// Longitude, if known.
    pub lon: Option<f64>,

    /// Latitude, if known.
    pub lat: Option<f64>,
}

impl WaypointDto {
    /// Convert to the domain waypoint.
    pub fn into_waypoint(self) -> Waypoint {
        Waypoint {
            name: self.name,
            lon: self.lon,
            lat: self.lat,
        }
    }
}

/// Response to a waypoint route request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointRouteResponse {
    /// Route type the trip was planned for.
    pub route_type: String,

    /// Resolved segments in traversal order.
    pub segments: Vec<SegmentResult>,

    /// Segments skipped due to missing waypoint coordinates.
    pub skipped: Vec<SkippedResult>,

    /// Aggregate metrics.
    pub summary: SummaryResult,
}

impl WaypointRouteResponse {
    /// Build the response from an aggregated trip.
    pub fn from_trip(trip: Trip, route_type: Option<String>) -> Self {
        Self {
            route_type: route_type.unwrap_or_else(|| DEFAULT_ROUTE_TYPE.to_string()),
            segments: trip.segments.into_iter().map(SegmentResult::from_segment).collect(),
            skipped: trip.skipped.into_iter().map(SkippedResult::from_skipped).collect(),
            summary: SummaryResult::from_summary(trip.summary),
        }
    }
}

/// One resolved segment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentResult {
    /// 1-based traversal position.
    pub sequence: u32,

    /// Departing waypoint name.
    pub from: String,

    /// Arriving waypoint name.
    pub to: String,

    /// Segment duration in seconds.
    pub total_time: u32,

    /// Segment distance in metres.
    pub total_distance: u32,

    /// Segment fare.
    pub total_fare: u32,

    /// Segment walking time in seconds.
    pub total_walk_time: u32,

    /// Segment transfer count.
    pub transfer_count: u32,

    /// Whether this segment came from the pedestrian fallback.
    pub is_pedestrian_fallback: bool,

    /// Legs in travel order.
    pub legs: Vec<LegResult>,
}

impl SegmentResult {
    fn from_segment(segment: Segment) -> Self {
        Self {
            sequence: segment.sequence,
            from: segment.from.name,
            to: segment.to.name,
            total_time: segment.total_time,
            total_distance: segment.total_distance,
            total_fare: segment.total_fare,
            total_walk_time: segment.total_walk_time,
            transfer_count: segment.transfer_count,
            is_pedestrian_fallback: segment.source == RouteSource::PedestrianFallback,
            legs: segment.legs.into_iter().map(LegResult::from_leg).collect(),
        }
    }
}

/// One leg of a segment, tagged by mode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    /// Mode tag: "WALK", "SUBWAY", "BUS", or the provider's tag.
    pub mode: String,

    /// Leg duration in seconds.
    pub section_time: u32,

    /// Leg distance in metres.
    pub distance: u32,

    /// Leg start, absent for unrecognized modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<PlaceResult>,

    /// Leg end, absent for unrecognized modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<PlaceResult>,

    /// Walking steps; present only for WALK legs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepResult>>,

    /// Route display name; present only for ride legs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// Route color; present only for ride legs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_color: Option<String>,

    /// Passed stops; present only for ride legs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<StopResult>>,

    /// Raw provider leg; present only for unrecognized modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

impl LegResult {
    fn from_leg(leg: Leg) -> Self {
        match leg {
            Leg::Walk(walk) => Self {
                mode: "WALK".to_string(),
                section_time: walk.section_time,
                distance: walk.distance,
                start: Some(PlaceResult::from_place(walk.start)),
                end: Some(PlaceResult::from_place(walk.end)),
                steps: Some(walk.steps.into_iter().map(StepResult::from_step).collect()),
                route: None,
                route_color: None,
                stops: None,
                raw: None,
            },
            Leg::Subway(ride) => Self::from_ride("SUBWAY", ride),
            Leg::Bus(ride) => Self::from_ride("BUS", ride),
            Leg::Other(other) => Self {
                mode: other.mode,
                section_time: 0,
                distance: 0,
                start: None,
                end: None,
                steps: None,
                route: None,
                route_color: None,
                stops: None,
                raw: Some(other.raw),
            },
        }
    }

    fn from_ride(mode: &str, ride: RideLeg) -> Self {
        Self {
            mode: mode.to_string(),
            section_time: ride.section_time,
            distance: ride.distance,
            start: Some(PlaceResult::from_place(ride.start)),
            end: Some(PlaceResult::from_place(ride.end)),
            steps: None,
            route: Some(ride.route),
            route_color: Some(ride.route_color),
            stops: Some(ride.stops.into_iter().map(StopResult::from_stop).collect()),
            raw: None,
        }
    }
}

/// A named point on a leg boundary.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    /// Place name.
    pub name: String,

    /// Longitude.
    pub lon: f64,

    /// Latitude.
    pub lat: f64,
}

impl PlaceResult {
    fn from_place(place: Place) -> Self {
        Self {
            name: place.name,
            lon: place.lon,
            lat: place.lat,
        }
    }
}

/// One step of a walking leg.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResult {
    /// Street or path name.
    pub street_name: String,

    /// Step distance in metres.
    pub distance: u32,

    /// Instruction text.
    pub description: String,

    /// Partial path polyline text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linestring: Option<String>,
}

impl StepResult {
    fn from_step(step: WalkStep) -> Self {
        Self {
            street_name: step.street_name,
            distance: step.distance,
            description: step.description,
            linestring: step.linestring,
        }
    }
}

/// A stop passed by a ride leg.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Stop name.
    pub name: String,

    /// Longitude.
    pub lon: f64,

    /// Latitude.
    pub lat: f64,

    /// Position within the leg.
    pub index: u32,
}

impl StopResult {
    fn from_stop(stop: Stop) -> Self {
        Self {
            name: stop.name,
            lon: stop.lon,
            lat: stop.lat,
            index: stop.index,
        }
    }
}

/// A skipped segment record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedResult {
    /// 1-based traversal position the segment would have had.
    pub sequence: u32,

    /// Departing waypoint name.
    pub from: String,

    /// Arriving waypoint name.
    pub to: String,

    /// Why the segment was skipped.
    pub reason: String,
}

impl SkippedResult {
    fn from_skipped(skipped: SkippedSegment) -> Self {
        Self {
            sequence: skipped.sequence,
            from: skipped.from_name,
            to: skipped.to_name,
            reason: skipped.reason,
        }
    }
}

/// Aggregate trip metrics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
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

    /// First waypoint name once, then one name per resolved segment.
    pub waypoint_names: Vec<String>,
}

impl SummaryResult {
    fn from_summary(summary: TripSummary) -> Self {
        Self {
            total_time: summary.total_time,
            total_distance: summary.total_distance,
            total_fare: summary.total_fare,
            total_walk_time: summary.total_walk_time,
            total_transfer_count: summary.total_transfer_count,
            segment_count: summary.segment_count,
            waypoint_names: summary.waypoint_names,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
