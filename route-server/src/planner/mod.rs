//! Route planning: itinerary selection, per-segment resolution, and
//! whole-trip aggregation over the provider seams.

mod aggregate;
mod config;
mod segment;
mod select;


pub use aggregate::RouteAggregator;
pub use config::PlannerConfig;
pub use segment::{PedestrianProvider, SegmentRouter, TransitProvider, synthesize_walk_itinerary};
pub use select::fastest;
