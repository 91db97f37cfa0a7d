//! Multi-segment, multi-modal route aggregation server.
//!
//! Answers: "we need to meet at these places, in this order — how do we
//! get through all of them?" Each consecutive waypoint pair is routed via
//! an external transit provider, with a pedestrian fallback when transit
//! is unavailable, and the per-pair results are stitched into one trip.

pub mod cache;
pub mod domain;
pub mod pedestrian;
pub mod planner;
pub mod transit;
pub mod web;
