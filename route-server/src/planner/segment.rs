//! Per-segment routing state machine.
//!
//! One `SegmentRouter` run per waypoint pair. Transit is attempted first;
//! the unavailable signal, an empty candidate list, or candidates without a
//! usable total time all take the same fallback transition to a single
//! pedestrian attempt. A failed fallback is terminal for the whole trip.

use std::future::Future;

use tracing::{debug, warn};

use crate::domain::{
    Coordinate, Itinerary, Leg, Place, RouteError, RouteSource, Segment, WalkLeg, WalkStep,
    Waypoint,
};
use crate::pedestrian::{PedestrianClient, PedestrianRoute};
use crate::transit::{MockTransitClient, TransitClient, Unavailable};

use super::select;

/// Street label for synthesized fallback walk steps.
const FALLBACK_STREET: &str = "pedestrian road";

/// Instruction text for fallback points the provider left unlabelled.
const FALLBACK_DESCRIPTION: &str = "via point";

/// Source of transit itinerary candidates for one coordinate pair.
pub trait TransitProvider: Send + Sync {
    /// Fetch candidate itineraries, or the unavailable signal.
    fn itineraries(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> impl Future<Output = Result<Vec<Itinerary>, Unavailable>> + Send;
}

/// Source of walking routes for one coordinate pair.
pub trait PedestrianProvider: Send + Sync {
    /// Fetch a walking route; `None` means no route could be obtained.
    fn walk_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        start_name: &str,
        end_name: &str,
    ) -> impl Future<Output = Option<PedestrianRoute>> + Send;
}

impl<T: TransitProvider> TransitProvider for &T {
    fn itineraries(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> impl Future<Output = Result<Vec<Itinerary>, Unavailable>> + Send {
        (**self).itineraries(start, end)
    }
}

impl<T: TransitProvider> TransitProvider for std::sync::Arc<T> {
    fn itineraries(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> impl Future<Output = Result<Vec<Itinerary>, Unavailable>> + Send {
        (**self).itineraries(start, end)
    }
}

impl<P: PedestrianProvider> PedestrianProvider for &P {
    fn walk_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        start_name: &str,
        end_name: &str,
    ) -> impl Future<Output = Option<PedestrianRoute>> + Send {
        (**self).walk_route(start, end, start_name, end_name)
    }
}

impl<P: PedestrianProvider> PedestrianProvider for std::sync::Arc<P> {
    fn walk_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        start_name: &str,
        end_name: &str,
    ) -> impl Future<Output = Option<PedestrianRoute>> + Send {
        (**self).walk_route(start, end, start_name, end_name)
    }
}

impl TransitProvider for TransitClient {
    fn itineraries(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> impl Future<Output = Result<Vec<Itinerary>, Unavailable>> + Send {
        TransitClient::itineraries(self, start, end)
    }
}

impl TransitProvider for MockTransitClient {
    fn itineraries(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> impl Future<Output = Result<Vec<Itinerary>, Unavailable>> + Send {
        MockTransitClient::itineraries(self, start, end)
    }
}

impl PedestrianProvider for PedestrianClient {
    fn walk_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        start_name: &str,
        end_name: &str,
    ) -> impl Future<Output = Option<PedestrianRoute>> + Send {
        PedestrianClient::walk_route(self, start, end, start_name, end_name)
    }
}

/// The states a segment passes through while being resolved.
#[derive(Debug)]
enum SegmentState {
    /// Initial state: one transit provider call pending.
    AttemptTransit,

    /// Transit produced no usable route: one pedestrian call pending.
    AttemptPedestrianFallback,

    /// A route was chosen or synthesized.
    Resolved(Itinerary),

    /// Both providers exhausted. Terminal.
    Failed,
}

/// Resolves one waypoint pair to a segment.
pub struct SegmentRouter<'a, T, P> {
    transit: &'a T,
    pedestrian: &'a P,
}

impl<'a, T, P> SegmentRouter<'a, T, P>
where
    T: TransitProvider,
    P: PedestrianProvider,
{
    /// Create a router over the two provider seams.
    pub fn new(transit: &'a T, pedestrian: &'a P) -> Self {
        Self {
            transit,
            pedestrian,
        }
    }

    /// Run the state machine for one waypoint pair.
    ///
    /// The caller has already verified both waypoints carry coordinates;
    /// a pair that lost them anyway fails the segment rather than panicking.
    /// Makes at most one transit call and at most one pedestrian call.
    pub async fn resolve(
        &self,
        sequence: u32,
        from: &Waypoint,
        to: &Waypoint,
    ) -> Result<Segment, RouteError> {
        let (Some(start), Some(end)) = (from.coordinate(), to.coordinate()) else {
            warn!(sequence, "segment waypoints lost their coordinates");
            return Err(self.failure(sequence, from, to));
        };

        let mut state = SegmentState::AttemptTransit;
        loop {
            state = match state {
                SegmentState::AttemptTransit => self.attempt_transit(sequence, start, end).await,
                SegmentState::AttemptPedestrianFallback => {
                    self.attempt_fallback(sequence, start, end, from, to).await
                }
                SegmentState::Resolved(itinerary) => {
                    return Ok(Segment::from_itinerary(
                        sequence,
                        from.clone(),
                        to.clone(),
                        itinerary,
                    ));
                }
                SegmentState::Failed => return Err(self.failure(sequence, from, to)),
            };
        }
    }

    async fn attempt_transit(
        &self,
        sequence: u32,
        start: Coordinate,
        end: Coordinate,
    ) -> SegmentState {
        match self.transit.itineraries(start, end).await {
            Ok(candidates) => match select::fastest(&candidates) {
                Some(winner) => {
                    debug!(
                        sequence,
                        total_time = ?winner.total_time,
                        candidates = candidates.len(),
                        "transit itinerary selected"
                    );
                    SegmentState::Resolved(winner.clone())
                }
                None => {
                    debug!(
                        sequence,
                        candidates = candidates.len(),
                        "no usable transit candidate, trying pedestrian route"
                    );
                    SegmentState::AttemptPedestrianFallback
                }
            },
            Err(unavailable) => {
                debug!(sequence, %unavailable, "transit unavailable, trying pedestrian route");
                SegmentState::AttemptPedestrianFallback
            }
        }
    }

    async fn attempt_fallback(
        &self,
        sequence: u32,
        start: Coordinate,
        end: Coordinate,
        from: &Waypoint,
        to: &Waypoint,
    ) -> SegmentState {
        match self
            .pedestrian
            .walk_route(start, end, &from.name, &to.name)
            .await
        {
            Some(route) => {
                debug!(sequence, total_time = route.total_time, "pedestrian fallback resolved");
                SegmentState::Resolved(synthesize_walk_itinerary(&route, start, end, from, to))
            }
            None => {
                warn!(sequence, from = %from.name, to = %to.name, "both providers failed for segment");
                SegmentState::Failed
            }
        }
    }

    fn failure(&self, sequence: u32, from: &Waypoint, to: &Waypoint) -> RouteError {
        RouteError::SegmentFailed {
            sequence,
            from: from.name.clone(),
            to: to.name.clone(),
        }
    }
}

/// Build a single-leg WALK itinerary from a reconstructed pedestrian route.
///
/// Marked `PedestrianFallback` so it is distinguishable from a transit
/// itinerary that happens to be all walking. Each path point becomes one
/// step; the step's partial path is synthesized from the point and its
/// successor. A route with totals but no points gets one default step.
pub fn synthesize_walk_itinerary(
    route: &PedestrianRoute,
    start: Coordinate,
    end: Coordinate,
    from: &Waypoint,
    to: &Waypoint,
) -> Itinerary {
    let steps = if route.points.is_empty() {
        vec![WalkStep {
            street_name: FALLBACK_STREET.to_string(),
            distance: route.total_distance,
            description: FALLBACK_DESCRIPTION.to_string(),
            linestring: None,
        }]
    } else {
        route
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| WalkStep {
                street_name: FALLBACK_STREET.to_string(),
                distance: point.distance,
                description: point
                    .description
                    .clone()
                    .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
                linestring: route.points.get(i + 1).map(|next| {
                    format!("{},{} {},{}", point.lon, point.lat, next.lon, next.lat)
                }),
            })
            .collect()
    };

    let leg = WalkLeg {
        section_time: route.total_time,
        distance: route.total_distance,
        start: Place::new(&from.name, start.lon, start.lat),
        end: Place::new(&to.name, end.lon, end.lat),
        steps,
    };

    Itinerary {
        total_time: Some(route.total_time),
        total_distance: route.total_distance,
        total_walk_time: route.total_time,
        transfer_count: 0,
        fare: 0,
        legs: vec![Leg::Walk(leg)],
        source: RouteSource::PedestrianFallback,
    }
}
