//! Pedestrian provider request/response DTOs.
//!
//! The provider answers with a GeoJSON-like feature collection mixing
//! `Point` and `LineString` features; aggregate totals ride on whichever
//! feature carries them.

use serde::{Deserialize, Serialize};

/// Request body for the pedestrian route endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PedestrianRouteRequest {
    /// Start longitude, decimal string.
    pub start_x: String,

    /// Start latitude, decimal string.
    pub start_y: String,

    /// End longitude, decimal string.
    pub end_x: String,

    /// End latitude, decimal string.
    pub end_y: String,

    /// Start place name.
    pub start_name: String,

    /// End place name.
    pub end_name: String,

    /// Request coordinate system.
    pub req_coord_type: &'static str,

    /// Response coordinate system.
    pub res_coord_type: &'static str,

    /// Route search option ("0" = recommended).
    pub search_option: &'static str,

    /// Feature ordering hint.
    pub sort: &'static str,
}

/// Top-level pedestrian response.
#[derive(Debug, Clone, Deserialize)]
pub struct PedestrianResponse {
    /// Features in provider order (may be effectively unordered).
    pub features: Option<Vec<Feature>>,
}

/// One feature: a point along the route or a line between points.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Feature geometry.
    pub geometry: Option<Geometry>,

    /// Feature properties.
    pub properties: Option<Properties>,
}

/// Feature geometry; `coordinates` shape depends on the type.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// "Point" or "LineString".
    #[serde(rename = "type")]
    pub kind: String,

    /// Coordinates, `[lon, lat]` for points, `[[lon, lat], ...]` for lines.
    pub coordinates: Option<Coordinates>,
}

/// Coordinates of either geometry shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    /// A single `[lon, lat]` pair.
    Point([f64; 2]),

    /// A sequence of `[lon, lat]` pairs.
    Line(Vec<[f64; 2]>),
}

/// Feature properties. Only the fields this crate reads are modelled.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    /// Route total distance in metres; appears on one feature per response.
    pub total_distance: Option<u32>,

    /// Route total time in seconds; appears on one feature per response.
    pub total_time: Option<u32>,

    /// Point ordering index.
    pub index: Option<u32>,

    /// Instruction text for this point.
    pub description: Option<String>,

    /// Distance covered by this feature in metres.
    pub distance: Option<u32>,

    /// Nearby point name.
    pub name: Option<String>,
}
