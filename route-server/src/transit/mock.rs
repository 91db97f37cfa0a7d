//! Mock transit client for testing without provider access.
//!
//! Loads raw provider responses from JSON files and serves them through the
//! same classification path as the real client, so fixtures exercise the
//! too-close and empty-plan handling exactly as production does.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Coordinate, Itinerary};

use super::client::evaluate_response;
use super::error::Unavailable;
use super::types::TransitResponse;

/// Mock transit client that serves data from JSON files.
///
/// Expects files named `{startX}_{startY}__{endX}_{endY}.json` (e.g.
/// `127_37.5__127.01_37.51.json`), each containing a raw provider response
/// body.
#[derive(Clone)]
pub struct MockTransitClient {
    responses: Arc<RwLock<HashMap<String, TransitResponse>>>,
}

impl MockTransitClient {
    /// Create a new mock client by loading JSON files from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, Unavailable> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| Unavailable::Http {
            status: 0,
            message: format!("failed to read mock data directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| Unavailable::Http {
                status: 0,
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let key = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| Unavailable::Http {
                    status: 0,
                    message: format!("invalid filename: {path:?}"),
                })?
                .to_string();

            let json = std::fs::read_to_string(&path).map_err(|e| Unavailable::Http {
                status: 0,
                message: format!("failed to read {path:?}: {e}"),
            })?;

            let response: TransitResponse =
                serde_json::from_str(&json).map_err(|e| Unavailable::Http {
                    status: 0,
                    message: format!("failed to parse {path:?}: {e}"),
                })?;

            responses.insert(key, response);
        }

        if responses.is_empty() {
            return Err(Unavailable::Http {
                status: 0,
                message: format!("no mock response files found in {data_dir:?}"),
            });
        }

        Ok(Self {
            responses: Arc::new(RwLock::new(responses)),
        })
    }

    /// The fixture key for a coordinate pair.
    pub fn pair_key(start: Coordinate, end: Coordinate) -> String {
        format!("{}_{}__{}_{}", start.lon, start.lat, end.lon, end.lat)
    }

    /// Fetch candidate itineraries for one coordinate pair.
    ///
    /// Mimics `TransitClient::itineraries`: the fixture body goes through
    /// the same response classification, so a too-close fixture yields
    /// `Err(TooClose)` just like production.
    pub async fn itineraries(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Vec<Itinerary>, Unavailable> {
        let responses = self.responses.read().await;
        let key = Self::pair_key(start, end);

        let response = responses.get(&key).ok_or_else(|| Unavailable::Http {
            status: 404,
            message: format!(
                "no mock data for pair {key}. Available: {:?}",
                responses.keys().collect::<Vec<_>>()
            ),
        })?;

        evaluate_response(response)
    }

    /// List loaded fixture keys.
    pub async fn available_pairs(&self) -> Vec<String> {
        let responses = self.responses.read().await;
        responses.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &Path, key: &str, body: &str) {
        let mut file = std::fs::File::create(dir.join(format!("{key}.json"))).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn serves_fixture_through_classification() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(
            dir.path(),
            "127_37.5__127.01_37.51",
            r#"{"metaData": {"plan": {"itineraries": [{"totalTime": 600}]}}}"#,
        );

        let client = MockTransitClient::new(dir.path()).unwrap();
        let candidates = client
            .itineraries(Coordinate::new(127.0, 37.5), Coordinate::new(127.01, 37.51))
            .await
            .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].total_time, Some(600));
    }

    #[tokio::test]
    async fn too_close_fixture_yields_too_close() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "127_37.5__127.001_37.5001", r#"{"status": 11}"#);

        let client = MockTransitClient::new(dir.path()).unwrap();
        let result = client
            .itineraries(
                Coordinate::new(127.0, 37.5),
                Coordinate::new(127.001, 37.5001),
            )
            .await;

        assert!(matches!(result, Err(Unavailable::TooClose)));
    }

    #[tokio::test]
    async fn unknown_pair_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "127_37.5__127.01_37.51", r#"{}"#);

        let client = MockTransitClient::new(dir.path()).unwrap();
        let result = client
            .itineraries(Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0))
            .await;

        assert!(matches!(result, Err(Unavailable::Http { status: 404, .. })));
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MockTransitClient::new(dir.path()).is_err());
    }
}
