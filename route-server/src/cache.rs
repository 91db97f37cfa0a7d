//! Caching layer for transit provider responses.
//!
//! Candidate lists for a coordinate pair are stable over short horizons, so
//! a short TTL cuts provider traffic when the same pair recurs (retries,
//! shared segments between requests) without serving stale routes. Only raw
//! candidate lists are cached; computed trips never are, and neither are
//! unavailable outcomes, so a transient provider failure is retried on the
//! next request.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Coordinate, Itinerary};
use crate::planner::TransitProvider;
use crate::transit::Unavailable;

/// Cached candidate list for one coordinate pair.
type PairEntry = Arc<Vec<Itinerary>>;

/// Configuration for the transit cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached coordinate pairs.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Transit provider with caching.
///
/// Wraps any [`TransitProvider`] and caches successful candidate lists
/// keyed by the coordinate pair at fixed decimal precision.
pub struct CachedTransitClient<T> {
    inner: T,
    pairs: MokaCache<String, PairEntry>,
}

impl<T> CachedTransitClient<T>
where
    T: TransitProvider,
{
    /// Create a new cached client.
    pub fn new(inner: T, config: &CacheConfig) -> Self {
        let pairs = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, pairs }
    }

    /// Cache key for a coordinate pair.
    ///
    /// Six decimal places is roughly 10cm of longitude, well below any
    /// distance at which two pairs would route differently.
    fn pair_key(start: Coordinate, end: Coordinate) -> String {
        format!(
            "{:.6}_{:.6}__{:.6}_{:.6}",
            start.lon, start.lat, end.lon, end.lat
        )
    }

    /// Fetch candidate itineraries, consulting the cache first.
    ///
    /// Unavailable outcomes are never cached.
    pub async fn itineraries(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Vec<Itinerary>, Unavailable> {
        let key = Self::pair_key(start, end);

        if let Some(cached) = self.pairs.get(&key).await {
            return Ok((*cached).clone());
        }

        let candidates = self.inner.itineraries(start, end).await?;
        self.pairs
            .insert(key, Arc::new(candidates.clone()))
            .await;

        Ok(candidates)
    }

    /// Access the wrapped provider.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Number of cached coordinate pairs.
    pub fn entry_count(&self) -> u64 {
        self.pairs.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.pairs.invalidate_all();
    }
}

impl<T> TransitProvider for CachedTransitClient<T>
where
    T: TransitProvider,
{
    fn itineraries(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> impl std::future::Future<Output = Result<Vec<Itinerary>, Unavailable>> + Send {
        CachedTransitClient::itineraries(self, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteSource;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTransit {
        outcome: Result<Vec<Itinerary>, Unavailable>,
        calls: AtomicUsize,
    }

    impl CountingTransit {
        fn new(outcome: Result<Vec<Itinerary>, Unavailable>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TransitProvider for CountingTransit {
        fn itineraries(
            &self,
            _start: Coordinate,
            _end: Coordinate,
        ) -> impl Future<Output = Result<Vec<Itinerary>, Unavailable>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let outcome = self.outcome.clone();
            async move { outcome }
        }
    }

    fn candidate(total_time: u32) -> Itinerary {
        Itinerary {
            total_time: Some(total_time),
            total_distance: 1000,
            total_walk_time: 100,
            transfer_count: 0,
            fare: 1400,
            legs: vec![],
            source: RouteSource::Transit,
        }
    }

    #[tokio::test]
    async fn repeated_pair_hits_the_cache() {
        let inner = CountingTransit::new(Ok(vec![candidate(600)]));
        let cached = CachedTransitClient::new(&inner, &CacheConfig::default());

        let start = Coordinate::new(127.0, 37.5);
        let end = Coordinate::new(127.01, 37.51);

        let first = cached.itineraries(start, end).await.unwrap();
        let second = cached.itineraries(start, end).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(inner.call_count(), 1);
    }

    #[tokio::test]
    async fn distinct_pairs_do_not_collide() {
        let inner = CountingTransit::new(Ok(vec![candidate(600)]));
        let cached = CachedTransitClient::new(&inner, &CacheConfig::default());

        cached
            .itineraries(Coordinate::new(127.0, 37.5), Coordinate::new(127.01, 37.51))
            .await
            .unwrap();
        cached
            .itineraries(Coordinate::new(127.02, 37.52), Coordinate::new(127.03, 37.53))
            .await
            .unwrap();

        assert_eq!(inner.call_count(), 2);
    }

    #[tokio::test]
    async fn unavailable_is_not_cached() {
        let inner = CountingTransit::new(Err(Unavailable::Timeout));
        let cached = CachedTransitClient::new(&inner, &CacheConfig::default());

        let start = Coordinate::new(127.0, 37.5);
        let end = Coordinate::new(127.01, 37.51);

        assert!(cached.itineraries(start, end).await.is_err());
        assert!(cached.itineraries(start, end).await.is_err());

        // Each failed call reached the provider.
        assert_eq!(inner.call_count(), 2);
        assert_eq!(cached.entry_count(), 0);
    }

    #[test]
    fn pair_key_fixed_precision() {
        let key = CachedTransitClient::<CountingTransit>::pair_key(
            Coordinate::new(127.0, 37.5),
            Coordinate::new(127.01, 37.51),
        );
        assert_eq!(key, "127.000000_37.500000__127.010000_37.510000");
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(60));
        assert_eq!(config.max_capacity, 1000);
    }
}
