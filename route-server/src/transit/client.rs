//! Transit provider HTTP client.
//!
//! One POST per waypoint pair. Every failure mode — HTTP error, timeout,
//! malformed body, the provider's "too close" rejection — folds into the
//! `Unavailable` signal so the caller can fall back to pedestrian routing.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{Coordinate, Itinerary};

use super::convert::normalize_itinerary;
use super::error::Unavailable;
use super::types::{TransitResponse, TransitRouteRequest};

/// Provider status code meaning "origin and destination too close".
const TOO_CLOSE_STATUS: i64 = 11;

/// Provider error-message fragment with the same meaning
/// ("origin and destination are too close").
const TOO_CLOSE_MESSAGE: &str = "출발지와 도착지가 너무 가까움";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the transit client.
#[derive(Debug, Clone)]
pub struct TransitConfig {
    /// Application key for authentication.
    pub app_key: String,
    /// Itinerary endpoint URL.
    pub base_url: String,
    /// Maximum concurrent requests.
    pub max_concurrent: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum candidate itineraries to request per pair.
    pub count: u32,
}

impl TransitConfig {
    /// Create a new config with the given app key and endpoint URL.
    pub fn new(app_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            base_url: base_url.into(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
            count: 10,
        }
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Transit provider API client.
///
/// Uses a semaphore to limit concurrent requests and a per-request timeout
/// so one slow provider call can never stall a whole aggregation.
#[derive(Debug, Clone)]
pub struct TransitClient {
    http: reqwest::Client,
    base_url: String,
    count: u32,
    semaphore: Arc<Semaphore>,
}

impl TransitClient {
    /// Create a new transit client with the given configuration.
    pub fn new(config: TransitConfig) -> Result<Self, Unavailable> {
        let mut headers = HeaderMap::new();

        let app_key =
            HeaderValue::from_str(&config.app_key).map_err(|_| Unavailable::Http {
                status: 0,
                message: "invalid app key format".to_string(),
            })?;
        headers.insert("appKey", app_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            count: config.count,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch candidate itineraries for one coordinate pair.
    ///
    /// Returns the normalized candidates (possibly empty — the provider may
    /// legitimately find nothing), or `Unavailable` for anything else:
    /// too-close rejection, HTTP failure, timeout, malformed body.
    pub async fn itineraries(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Vec<Itinerary>, Unavailable> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| Unavailable::Network("semaphore closed".to_string()))?;

        let request = TransitRouteRequest {
            start_x: start.lon.to_string(),
            start_y: start.lat.to_string(),
            end_x: end.lon.to_string(),
            end_y: end.lat.to_string(),
            lang: 0,
            format: "json",
            count: self.count,
            include_detailed_stops: true,
        };

        debug!(%start, %end, "requesting transit itineraries");

        let response = self
            .http
            .post(&self.base_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Unavailable::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: TransitResponse =
            serde_json::from_str(&body).map_err(|e| Unavailable::MalformedBody {
                message: format!("{e} (body: {})", body.chars().take(200).collect::<String>()),
            })?;

        evaluate_response(&parsed)
    }
}

/// Classify a parsed provider response.
///
/// `Err(TooClose)` when the provider rejected the pair as too close for
/// transit; otherwise the normalized candidate list, with a missing plan
/// treated as an empty list (never null).
pub(crate) fn evaluate_response(
    response: &TransitResponse,
) -> Result<Vec<Itinerary>, Unavailable> {
    if reports_too_close(response) {
        return Err(Unavailable::TooClose);
    }

    let itineraries = response
        .meta_data
        .as_ref()
        .and_then(|m| m.plan.as_ref())
        .and_then(|p| p.itineraries.as_deref())
        .unwrap_or(&[]);

    Ok(itineraries.iter().map(normalize_itinerary).collect())
}

/// Whether the response carries the "too close for transit" rejection,
/// either as the documented status code or as the message text.
fn reports_too_close(response: &TransitResponse) -> bool {
    if response.status == Some(TOO_CLOSE_STATUS) {
        return true;
    }
    response
        .error
        .as_deref()
        .is_some_and(|e| e.contains(TOO_CLOSE_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> TransitResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn config_builder() {
        let config = TransitConfig::new("test-key", "http://localhost:9000/transit")
            .with_max_concurrent(10)
            .with_timeout(3);

        assert_eq!(config.app_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:9000/transit");
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn config_defaults() {
        let config = TransitConfig::new("key", "http://example.invalid");
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.count, 10);
    }

    #[test]
    fn client_creation() {
        let config = TransitConfig::new("key", "http://example.invalid");
        assert!(TransitClient::new(config).is_ok());
    }

    #[test]
    fn status_11_is_too_close() {
        let response = parse(r#"{"status": 11}"#);
        assert!(matches!(
            evaluate_response(&response),
            Err(Unavailable::TooClose)
        ));
    }

    #[test]
    fn too_close_message_without_status() {
        let response =
            parse(r#"{"error": "교통수단 없음: 출발지와 도착지가 너무 가까움"}"#);
        assert!(matches!(
            evaluate_response(&response),
            Err(Unavailable::TooClose)
        ));
    }

    #[test]
    fn missing_plan_is_empty_not_error() {
        let response = parse(r#"{"metaData": {}}"#);
        assert_eq!(evaluate_response(&response).unwrap().len(), 0);

        let response = parse(r#"{}"#);
        assert_eq!(evaluate_response(&response).unwrap().len(), 0);
    }

    #[test]
    fn itineraries_are_normalized() {
        let response = parse(
            r#"{"metaData": {"plan": {"itineraries": [
                {"totalTime": 600, "totalDistance": 2000},
                {"totalTime": 900, "totalDistance": 1500}
            ]}}}"#,
        );

        let candidates = evaluate_response(&response).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].total_time, Some(600));
        assert_eq!(candidates[1].total_time, Some(900));
    }

    #[test]
    fn unrelated_error_is_not_too_close() {
        let response = parse(r#"{"error": "invalid app key"}"#);
        // No metaData either, so this is an empty candidate list.
        assert_eq!(evaluate_response(&response).unwrap().len(), 0);
    }
}
