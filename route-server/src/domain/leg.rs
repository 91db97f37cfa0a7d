//! Normalized leg types.
//!
//! The transit provider tags each leg with a free-form `mode` string.
//! Normalization decides the variant exactly once; downstream code matches
//! on `Leg` and never re-inspects mode strings.

use serde::Serialize;

/// A named point on a leg boundary (start or end of a leg).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Place name as reported by the provider (may be empty).
    pub name: String,

    /// Longitude in decimal degrees (0.0 when the provider omitted it).
    pub lon: f64,

    /// Latitude in decimal degrees (0.0 when the provider omitted it).
    pub lat: f64,
}

impl Place {
    /// Create a place.
    pub fn new(name: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            name: name.into(),
            lon,
            lat,
        }
    }
}

/// One step of a walking leg.
///
/// `linestring` carries the provider's partial-path polyline text verbatim;
/// it is opaque to this crate and round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkStep {
    /// Street or path name.
    pub street_name: String,

    /// Step distance in metres (0 when the provider omitted it).
    pub distance: u32,

    /// Human-readable instruction text.
    pub description: String,

    /// Partial path as "lon,lat lon,lat ..." polyline text, if any.
    pub linestring: Option<String>,
}

/// A walking leg: ordered steps between two places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkLeg {
    /// Leg duration in seconds.
    pub section_time: u32,

    /// Leg distance in metres.
    pub distance: u32,

    /// Where the leg starts.
    pub start: Place,

    /// Where the leg ends.
    pub end: Place,

    /// Steps in provider order.
    pub steps: Vec<WalkStep>,
}

/// A stop passed by a subway or bus leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    /// Station or stop name.
    pub name: String,

    /// Longitude (0.0 when unparseable or omitted).
    pub lon: f64,

    /// Latitude (0.0 when unparseable or omitted).
    pub lat: f64,

    /// Position of this stop within the leg, as reported by the provider.
    pub index: u32,
}

/// A vehicle leg (subway or bus): a ride along a route passing stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideLeg {
    /// Route display name (e.g. line or bus number).
    pub route: String,

    /// Provider route identifier.
    pub route_id: String,

    /// Route display color (hex string without '#', as the provider sends it).
    pub route_color: String,

    /// Provider service flag (0 = not running today, 1 = running).
    pub service: u32,

    /// Leg duration in seconds.
    pub section_time: u32,

    /// Leg distance in metres.
    pub distance: u32,

    /// Where the leg starts.
    pub start: Place,

    /// Where the leg ends.
    pub end: Place,

    /// Stops in provider order.
    pub stops: Vec<Stop>,
}

/// A leg whose mode tag we do not recognize.
///
/// The raw provider leg is retained wholesale so nothing is silently
/// dropped; consumers that care can inspect `raw`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtherLeg {
    /// The unrecognized mode tag.
    pub mode: String,

    /// The provider leg as received.
    pub raw: serde_json::Value,
}

/// A mode-homogeneous sub-route of an itinerary.
///
/// Closed set: a provider leg maps to exactly one variant at normalization
/// time. Unknown modes land in `Other`, never dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Leg {
    /// Walking between two places.
    Walk(WalkLeg),

    /// Subway ride.
    Subway(RideLeg),

    /// Bus ride.
    Bus(RideLeg),

    /// Unrecognized mode, raw fields preserved.
    Other(OtherLeg),
}

impl Leg {
    /// The mode tag this leg would carry on the wire.
    pub fn mode(&self) -> &str {
        match self {
            Leg::Walk(_) => "WALK",
            Leg::Subway(_) => "SUBWAY",
            Leg::Bus(_) => "BUS",
            Leg::Other(other) => &other.mode,
        }
    }

    /// Leg duration in seconds, where known.
    pub fn section_time(&self) -> u32 {
        match self {
            Leg::Walk(walk) => walk.section_time,
            Leg::Subway(ride) | Leg::Bus(ride) => ride.section_time,
            Leg::Other(_) => 0,
        }
    }
}
