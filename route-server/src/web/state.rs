//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::{PedestrianProvider, RouteAggregator, TransitProvider};

/// Shared application state.
///
/// Generic over the provider seams so the router can be exercised with
/// scripted providers in tests.
pub struct AppState<T, P> {
    /// Route aggregator over the configured providers.
    pub aggregator: Arc<RouteAggregator<T, P>>,
}

impl<T, P> Clone for AppState<T, P> {
    fn clone(&self) -> Self {
        Self {
            aggregator: Arc::clone(&self.aggregator),
        }
    }
}

impl<T, P> AppState<T, P>
where
    T: TransitProvider,
    P: PedestrianProvider,
{
    /// Create a new app state.
    pub fn new(aggregator: RouteAggregator<T, P>) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}
