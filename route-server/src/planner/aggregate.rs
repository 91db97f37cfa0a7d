//! Multi-segment route aggregation.
//!
//! Decomposes an ordered waypoint list into consecutive pairs, resolves each
//! pair through the segment state machine, and stitches the results back
//! into a single trip. Segments run concurrently in bounded batches but the
//! output is always in traversal order.

use futures::future::join_all;
use tracing::{info, warn};

use crate::domain::{RouteError, SkippedSegment, Trip, TripSummary, Waypoint};

use super::config::PlannerConfig;
use super::segment::{PedestrianProvider, SegmentRouter, TransitProvider};

/// Plans whole trips over the two provider seams.
pub struct RouteAggregator<T, P> {
    transit: T,
    pedestrian: P,
    config: PlannerConfig,
}

impl<T, P> RouteAggregator<T, P>
where
    T: TransitProvider,
    P: PedestrianProvider,
{
    /// Create an aggregator.
    pub fn new(transit: T, pedestrian: P, config: PlannerConfig) -> Self {
        Self {
            transit,
            pedestrian,
            config,
        }
    }

    /// Resolve an ordered waypoint list into a trip.
    ///
    /// Fewer than 2 waypoints is rejected before any provider call. A pair
    /// touching a waypoint without coordinates is skipped and recorded, not
    /// failed. Any other unresolvable pair fails the whole trip: a trip with
    /// a missing interior segment is never returned.
    pub async fn plan_route(&self, waypoints: &[Waypoint]) -> Result<Trip, RouteError> {
        if waypoints.len() < 2 {
            return Err(RouteError::MalformedWaypointList(waypoints.len()));
        }

        let mut jobs: Vec<(u32, &Waypoint, &Waypoint)> = Vec::new();
        let mut skipped = Vec::new();
        for (i, pair) in waypoints.windows(2).enumerate() {
            let sequence = (i + 1) as u32;
            let (from, to) = (&pair[0], &pair[1]);
            if from.coordinate().is_some() && to.coordinate().is_some() {
                jobs.push((sequence, from, to));
            } else {
                let reason = skip_reason(from, to);
                warn!(sequence, from = %from.name, to = %to.name, reason, "skipping segment");
                skipped.push(SkippedSegment {
                    sequence,
                    from_name: from.name.clone(),
                    to_name: to.name.clone(),
                    reason,
                });
            }
        }

        let router = SegmentRouter::new(&self.transit, &self.pedestrian);
        let mut segments = Vec::with_capacity(jobs.len());
        let mut summary = TripSummary::default();

        // Batches run concurrently; job order within and across batches is
        // traversal order, so appending batch results keeps sequence
        // strictly increasing.
        for batch in jobs.chunks(self.config.batch_size) {
            let results = join_all(
                batch
                    .iter()
                    .map(|(sequence, from, to)| router.resolve(*sequence, from, to)),
            )
            .await;

            for result in results {
                let segment = result?;
                summary.accumulate(&segment);
                segments.push(segment);
            }
        }

        info!(
            segments = segments.len(),
            skipped = skipped.len(),
            total_time = summary.total_time,
            "trip aggregated"
        );

        Ok(Trip {
            segments,
            skipped,
            summary,
        })
    }
}

fn skip_reason(from: &Waypoint, to: &Waypoint) -> String {
    match (from.coordinate(), to.coordinate()) {
        (None, None) => format!(
            "waypoints '{}' and '{}' have no coordinates",
            from.name, to.name
        ),
        (None, Some(_)) => format!("waypoint '{}' has no coordinates", from.name),
        _ => format!("waypoint '{}' has no coordinates", to.name),
    }
}
