//! Orchestrator configuration

/// Configuration for the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Maximum model round-trips per turn. Counted per tool round: a turn
    /// with k tool rounds and a final answer performs k+1 completions, and
    /// k is bounded by this value. Must be positive.
    pub max_round_trips: usize,
    /// Maximum tokens per completion
    pub max_tokens: Option<u32>,
    /// Temperature for completions
    pub temperature: Option<f32>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_round_trips: 10,
            max_tokens: Some(1024),
            temperature: Some(0.7),
        }
    }
}

impl OrchestratorConfig {
    /// Create a new configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round-trip bound (clamped to at least 1)
    #[must_use]
    pub fn with_max_round_trips(mut self, max: usize) -> Self {
        self.max_round_trips = max.max(1);
        self
    }

    /// Set max tokens per completion
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = OrchestratorConfig::new()
            .with_max_round_trips(5)
            .with_max_tokens(256)
            .with_temperature(0.2);

        assert_eq!(config.max_round_trips, 5);
        assert_eq!(config.max_tokens, Some(256));
        assert_eq!(config.temperature, Some(0.2));
    }

    #[test]
    fn test_round_trips_clamped_positive() {
        let config = OrchestratorConfig::new().with_max_round_trips(0);
        assert_eq!(config.max_round_trips, 1);
    }
}
