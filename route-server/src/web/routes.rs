//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{RouteError, Waypoint};
use crate::planner::{PedestrianProvider, TransitProvider};

use super::dto::{ErrorResponse, WaypointRouteRequest, WaypointRouteResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router<T, P>(state: AppState<T, P>) -> Router
where
    T: TransitProvider + 'static,
    P: PedestrianProvider + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/routes/waypoints", post(plan_waypoint_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a trip through an ordered waypoint list.
async fn plan_waypoint_route<T, P>(
    State(state): State<AppState<T, P>>,
    Json(request): Json<WaypointRouteRequest>,
) -> Result<Json<WaypointRouteResponse>, AppError>
where
    T: TransitProvider,
    P: PedestrianProvider,
{
    let WaypointRouteRequest {
        waypoints,
        route_type,
    } = request;

    let waypoints: Vec<Waypoint> = waypoints
        .into_iter()
        .map(|w| w.into_waypoint())
        .collect();

    let trip = state.aggregator.plan_route(&waypoints).await?;

    Ok(Json(WaypointRouteResponse::from_trip(trip, route_type)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    UpstreamFailed { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::MalformedWaypointList(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            RouteError::SegmentFailed { .. } => AppError::UpstreamFailed {
                message: format!("route could not be computed: {e}"),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::UpstreamFailed { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = status.as_u16(), %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, Itinerary, RouteSource};
    use crate::pedestrian::{PathPoint, PedestrianRoute};
    use crate::planner::{PlannerConfig, RouteAggregator};
    use crate::transit::Unavailable;
    use crate::web::dto::WaypointDto;
    use std::future::Future;

    /// Transit stub: first pair has candidates, second pair is too close.
    struct TwoPairTransit;

    impl TransitProvider for TwoPairTransit {
        fn itineraries(
            &self,
            start: Coordinate,
            _end: Coordinate,
        ) -> impl Future<Output = Result<Vec<Itinerary>, Unavailable>> + Send {
            let outcome = if start.lon < 127.005 {
                Ok(vec![Itinerary {
                    total_time: Some(600),
                    total_distance: 3000,
                    total_walk_time: 120,
                    transfer_count: 1,
                    fare: 1400,
                    legs: vec![],
                    source: RouteSource::Transit,
                }])
            } else {
                Err(Unavailable::TooClose)
            };
            async move { outcome }
        }
    }

    /// Pedestrian stub that always finds a 240s walk.
    struct AlwaysWalks;

    impl PedestrianProvider for AlwaysWalks {
        fn walk_route(
            &self,
            _start: Coordinate,
            _end: Coordinate,
            _start_name: &str,
            _end_name: &str,
        ) -> impl Future<Output = Option<PedestrianRoute>> + Send {
            async move {
                Some(PedestrianRoute {
                    total_distance: 300,
                    total_time: 240,
                    points: vec![PathPoint {
                        lon: 127.01,
                        lat: 37.51,
                        description: None,
                        distance: 300,
                    }],
                })
            }
        }
    }

    /// Pedestrian stub that never finds a route.
    struct NeverWalks;

    impl PedestrianProvider for NeverWalks {
        fn walk_route(
            &self,
            _start: Coordinate,
            _end: Coordinate,
            _start_name: &str,
            _end_name: &str,
        ) -> impl Future<Output = Option<PedestrianRoute>> + Send {
            async move { None }
        }
    }

    fn request(waypoints: Vec<(&str, f64, f64)>) -> WaypointRouteRequest {
        WaypointRouteRequest {
            waypoints: waypoints
                .into_iter()
                .map(|(name, lon, lat)| WaypointDto {
                    name: name.to_string(),
                    lon: Some(lon),
                    lat: Some(lat),
                })
                .collect(),
            route_type: None,
        }
    }

    #[tokio::test]
    async fn plan_handler_returns_stitched_trip() {
        let state = AppState::new(RouteAggregator::new(
            TwoPairTransit,
            AlwaysWalks,
            PlannerConfig::default(),
        ));

        let response = plan_waypoint_route(
            State(state),
            Json(request(vec![
                ("Start", 127.0, 37.5),
                ("Cafe", 127.01, 37.51),
                ("Park", 127.012, 37.512),
            ])),
        )
        .await
        .unwrap();

        assert_eq!(response.0.segments.len(), 2);
        assert_eq!(response.0.summary.total_time, 840);
        assert!(response.0.segments[1].is_pedestrian_fallback);
        assert_eq!(response.0.route_type, "fastest");
    }

    #[tokio::test]
    async fn short_waypoint_list_is_bad_request() {
        let state = AppState::new(RouteAggregator::new(
            TwoPairTransit,
            AlwaysWalks,
            PlannerConfig::default(),
        ));

        let error = plan_waypoint_route(State(state), Json(request(vec![("Alone", 127.0, 37.5)])))
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn failed_segment_is_upstream_failure() {
        // Both pairs beyond 127.005 are too close and the pedestrian
        // provider never answers, so the second segment fails.
        let state = AppState::new(RouteAggregator::new(
            TwoPairTransit,
            NeverWalks,
            PlannerConfig::default(),
        ));

        let error = plan_waypoint_route(
            State(state),
            Json(request(vec![
                ("Start", 127.0, 37.5),
                ("Cafe", 127.01, 37.51),
                ("Park", 127.012, 37.512),
            ])),
        )
        .await
        .unwrap_err();

        match error {
            AppError::UpstreamFailed { message } => {
                assert!(message.contains("route could not be computed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_statuses() {
        let bad = AppError::BadRequest {
            message: "m".into(),
        }
        .into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let upstream = AppError::UpstreamFailed {
            message: "m".into(),
        }
        .into_response();
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);

        let internal = AppError::Internal {
            message: "m".into(),
        }
        .into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
