//! Planner configuration.

/// Configuration parameters for route aggregation.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum number of segments resolved in parallel per batch.
    /// Higher values increase parallelism but also provider load.
    pub batch_size: usize,
}

impl PlannerConfig {
    /// Create a new configuration.
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { batch_size: 4 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(PlannerConfig::default().batch_size, 4);
    }

    #[test]
    fn batch_size_is_at_least_one() {
        assert_eq!(PlannerConfig::new(0).batch_size, 1);
        assert_eq!(PlannerConfig::new(8).batch_size, 8);
    }
}
