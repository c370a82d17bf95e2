//! Tunables for the simulator, history and feed runner

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunables shared by the simulator, the history and the feed runner.
///
/// Every field has a default, so a JSON document only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Time-to-fill contribution of each consumed level
    pub time_per_level_ms: f64,
    /// Upper bound of the random time-to-fill jitter
    pub max_jitter_ms: f64,
    /// Number of archived simulations kept, newest first
    pub history_capacity: usize,
    /// Levels per side plotted on the depth chart
    pub depth_chart_levels: usize,
    /// Levels per side shown in the book table
    pub table_levels: usize,
    /// Market impact above which a simulation is flagged
    pub high_impact_threshold_pct: f64,
    /// Slippage above which a simulation is flagged
    pub high_slippage_threshold_pct: f64,
    /// Polling cadence of the feed runner
    pub feed_interval_ms: u64,
    /// Age after which a book without updates is considered stale
    pub stale_after_ms: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            time_per_level_ms: 1000.0,
            max_jitter_ms: 5000.0,
            history_capacity: 10,
            depth_chart_levels: 20,
            table_levels: 15,
            high_impact_threshold_pct: 5.0,
            high_slippage_threshold_pct: 1.0,
            feed_interval_ms: 100,
            stale_after_ms: 3000,
        }
    }
}

impl SimulatorConfig {
    /// Parse a JSON document, filling missing keys with defaults
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulator cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("time_per_level_ms", self.time_per_level_ms),
            ("max_jitter_ms", self.max_jitter_ms),
            ("high_impact_threshold_pct", self.high_impact_threshold_pct),
            ("high_slippage_threshold_pct", self.high_slippage_threshold_pct),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a finite non-negative number, got {}", value),
                });
            }
        }

        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "history_capacity",
                reason: "must keep at least one simulation".to_string(),
            });
        }

        let levels_shown = [
            ("depth_chart_levels", self.depth_chart_levels),
            ("table_levels", self.table_levels),
        ];
        for (field, levels) in levels_shown {
            if levels == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must show at least one level".to_string(),
                });
            }
        }

        if self.feed_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "feed_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
