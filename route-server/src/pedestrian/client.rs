//! Pedestrian provider HTTP client.
//!
//! The second seam of the fallback policy: any failure here returns
//! "no route" (`None`), which the caller treats exactly like the transit
//! unavailable signal.

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::domain::Coordinate;

use super::types::{Coordinates, PedestrianResponse, PedestrianRouteRequest};

/// An ordered point along a reconstructed pedestrian path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPoint {
    /// Longitude.
    pub lon: f64,

    /// Latitude.
    pub lat: f64,

    /// Instruction text for this point, if any.
    pub description: Option<String>,

    /// Distance covered up to the next point, in metres.
    pub distance: u32,
}

/// A pedestrian route: aggregate totals plus the ordered path.
#[derive(Debug, Clone, PartialEq)]
pub struct PedestrianRoute {
    /// Total distance in metres.
    pub total_distance: u32,

    /// Total time in seconds.
    pub total_time: u32,

    /// Path points in traversal order.
    pub points: Vec<PathPoint>,
}

/// Configuration for the pedestrian client.
#[derive(Debug, Clone)]
pub struct PedestrianConfig {
    /// Application key for authentication.
    pub app_key: String,
    /// Pedestrian route endpoint URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl PedestrianConfig {
    /// Create a new config with the given app key and endpoint URL.
    pub fn new(app_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            base_url: base_url.into(),
            timeout_secs: 10,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Pedestrian provider API client.
#[derive(Debug, Clone)]
pub struct PedestrianClient {
    http: reqwest::Client,
    base_url: String,
}

impl PedestrianClient {
    /// Create a new pedestrian client.
    ///
    /// Fails only on an app key that cannot be a header value.
    pub fn new(config: PedestrianConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        if let Ok(app_key) = HeaderValue::from_str(&config.app_key) {
            headers.insert("appKey", app_key);
        } else {
            warn!("pedestrian app key is not a valid header value; requests will fail");
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch a walking route for one coordinate pair.
    ///
    /// Returns `None` on any failure — HTTP error, timeout, malformed body,
    /// or a response with no usable totals. The caller treats `None`
    /// identically to the transit unavailable signal.
    pub async fn walk_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        start_name: &str,
        end_name: &str,
    ) -> Option<PedestrianRoute> {
        let request = PedestrianRouteRequest {
            start_x: start.lon.to_string(),
            start_y: start.lat.to_string(),
            end_x: end.lon.to_string(),
            end_y: end.lat.to_string(),
            start_name: start_name.to_string(),
            end_name: end_name.to_string(),
            req_coord_type: "WGS84GEO",
            res_coord_type: "WGS84GEO",
            search_option: "0",
            sort: "index",
        };

        debug!(%start, %end, "requesting pedestrian route");

        let response = match self.http.post(&self.base_url).json(&request).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "pedestrian request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "pedestrian API returned error status");
            return None;
        }

        let parsed: PedestrianResponse = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "malformed pedestrian response");
                return None;
            }
        };

        assemble_route(&parsed)
    }
}

/// Reconstruct an ordered route from a parsed pedestrian response.
///
/// The provider returns path points as a flat list of `Point` features
/// that may arrive unordered; they are sorted by the `index` property
/// (stable, so equal indices keep arrival order). Aggregate totals are
/// read from whichever feature carries them. Returns `None` when no
/// feature carries a total time — a response without totals is not a
/// usable route.
pub fn assemble_route(response: &PedestrianResponse) -> Option<PedestrianRoute> {
    let features = response.features.as_deref()?;

    let total_time = features
        .iter()
        .find_map(|f| f.properties.as_ref().and_then(|p| p.total_time))?;
    let total_distance = features
        .iter()
        .find_map(|f| f.properties.as_ref().and_then(|p| p.total_distance))
        .unwrap_or(0);

    let mut points: Vec<(u32, PathPoint)> = Vec::new();
    for (position, feature) in features.iter().enumerate() {
        let Some(geometry) = &feature.geometry else {
            continue;
        };
        if geometry.kind != "Point" {
            continue;
        }
        let Some(Coordinates::Point([lon, lat])) = geometry.coordinates else {
            continue;
        };

        let properties = feature.properties.as_ref();
        let index = properties
            .and_then(|p| p.index)
            .unwrap_or(position as u32);
        points.push((
            index,
            PathPoint {
                lon,
                lat,
                description: properties.and_then(|p| p.description.clone()),
                distance: properties.and_then(|p| p.distance).unwrap_or(0),
            },
        ));
    }

    points.sort_by_key(|(index, _)| *index);

    Some(PedestrianRoute {
        total_distance,
        total_time,
        points: points.into_iter().map(|(_, point)| point).collect(),
    })
}
