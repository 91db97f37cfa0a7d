//! Multi-modal transit provider client.
//!
//! One POST per waypoint pair returns candidate itineraries with
//! heterogeneous per-mode legs. Key characteristics of the provider:
//! - Status 11 (or an error message to the same effect) means the
//!   endpoints are too close for transit routing — the documented
//!   pedestrian-fallback trigger, not a fatal error.
//! - Coordinates are numeric in some fields and decimal strings in others.
//! - Optional fields are omitted rather than sent as null.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{TransitClient, TransitConfig};
pub use convert::{normalize_itinerary, normalize_leg};
pub use error::Unavailable;
pub use mock::MockTransitClient;
pub use types::{
    Fare, MetaData, PassShape, PassStopList, Plan, RegularFare, TransitItinerary, TransitLeg,
    TransitPlace, TransitResponse, TransitRouteRequest, TransitStep, TransitStop,
};
