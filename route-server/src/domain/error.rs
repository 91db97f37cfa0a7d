//! Trip-level error types.
//!
//! Provider-level failures (unavailable transit, failed pedestrian lookup)
//! are handled inside the planner; only these two surface to the caller.

/// Errors that fail a whole route request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RouteError {
    /// Fewer than two waypoints were supplied. Rejected before any
    /// network call.
    #[error("waypoint list must contain at least 2 waypoints, got {0}")]
    MalformedWaypointList(usize),

    /// A segment exhausted both transit and pedestrian routing. The trip
    /// is never returned with a missing interior segment.
    #[error("no route found for segment {sequence}: {from} -> {to}")]
    SegmentFailed {
        /// 1-based segment position.
        sequence: u32,
        /// Departing waypoint name.
        from: String,
        /// Arriving waypoint name.
        to: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::MalformedWaypointList(1);
        assert_eq!(
            err.to_string(),
            "waypoint list must contain at least 2 waypoints, got 1"
        );

        let err = RouteError::SegmentFailed {
            sequence: 2,
            from: "Cafe".into(),
            to: "Park".into(),
        };
        assert_eq!(err.to_string(), "no route found for segment 2: Cafe -> Park");
    }
}
