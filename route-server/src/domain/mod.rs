//! Domain types for waypoint route aggregation.
//!
//! Everything here is constructed and consumed within a single request;
//! nothing is persisted by this crate.

mod error;
mod itinerary;
mod leg;
mod trip;
mod waypoint;

pub use error::RouteError;
pub use itinerary::{Itinerary, RouteSource};
pub use leg::{Leg, OtherLeg, Place, RideLeg, Stop, WalkLeg, WalkStep};
pub use trip::{Segment, SkippedSegment, Trip, TripSummary};
pub use waypoint::{Coordinate, Waypoint};
