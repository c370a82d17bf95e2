#[cfg(test)]
mod tests {
    use crate::{ConfigError, OrderBookSnapshot, PriceLevel, SimulatorConfig};

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.time_per_level_ms, 1000.0);
        assert_eq!(config.max_jitter_ms, 5000.0);
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.depth_chart_levels, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = SimulatorConfig::from_json(r#"{"max_jitter_ms": 0.0, "history_capacity": 3}"#)
            .expect("valid config");

        assert_eq!(config.max_jitter_ms, 0.0);
        assert_eq!(config.history_capacity, 3);
        assert_eq!(config.time_per_level_ms, 1000.0);
    }

    #[test]
    fn test_rejects_negative_jitter() {
        let err = SimulatorConfig::from_json(r#"{"max_jitter_ms": -1.0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "max_jitter_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_history() {
        let config = SimulatorConfig {
            history_capacity: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            SimulatorConfig::from_json("[1, 2"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulatorConfig {
            stale_after_ms: 500,
            ..Default::default()
        };
        let json = config.to_json().expect("serialize");
        assert_eq!(SimulatorConfig::from_json(&json).expect("parse"), config);
    }

    #[test]
    fn test_table_levels_limit_rendered_rows() {
        let config = SimulatorConfig::from_json(r#"{"table_levels": 2}"#).expect("valid config");
        let levels = |start: f64, step: f64| {
            (0..5)
                .map(|i| PriceLevel {
                    price: start + step * i as f64,
                    size: 1.0,
                })
                .collect::<Vec<_>>()
        };
        let book = OrderBookSnapshot::new("TEST", 1, levels(99.0, -1.0), levels(101.0, 1.0));

        let table = book.top(config.table_levels);
        assert_eq!(table.bids.len(), 2);
        assert_eq!(table.asks.len(), 2);
        assert_eq!(table.best_bid(), book.best_bid());
        assert_eq!(SimulatorConfig::default().table_levels, 15);
    }

    #[test]
    fn test_rejects_zero_table_levels() {
        let err = SimulatorConfig::from_json(r#"{"table_levels": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "table_levels",
                ..
            }
        ));
    }
}
