//! Waypoints and coordinates.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair, longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in signed decimal degrees.
    pub lon: f64,

    /// Latitude in signed decimal degrees.
    pub lat: f64,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

/// A named geographic point the trip must pass through, in caller-fixed order.
///
/// Coordinates may be absent for a given entry; the aggregator skips
/// segments touching such a waypoint rather than failing the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Human-readable place name.
    pub name: String,

    /// Longitude, if known.
    pub lon: Option<f64>,

    /// Latitude, if known.
    pub lat: Option<f64>,
}

impl Waypoint {
    /// Create a waypoint with both coordinates present.
    pub fn new(name: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            name: name.into(),
            lon: Some(lon),
            lat: Some(lat),
        }
    }

    /// Create a waypoint whose position is unknown.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lon: None,
            lat: None,
        }
    }

    /// Returns the coordinate if both longitude and latitude are present.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lon, self.lat) {
            (Some(lon), Some(lat)) => Some(Coordinate { lon, lat }),
            _ => None,
        }
    }
}
