//! Pedestrian routing provider client.
//!
//! Used only as the fallback when transit routing is unavailable for a
//! waypoint pair. The provider returns a feature collection; this module
//! turns it into an ordered path with aggregate totals.

mod client;
mod types;

pub use client::{
    PathPoint, PedestrianClient, PedestrianConfig, PedestrianRoute, assemble_route,
};
pub use types::{
    Coordinates, Feature, Geometry, PedestrianResponse, PedestrianRouteRequest, Properties,
};
