//! End-to-end impact scenarios through the public API

#[cfg(test)]
mod simulation_scenarios_tests {
    use orderbook_sim::{
        FixedJitter, ImpactSimulator, OrderBookSnapshot, PriceLevel, Side, SimulatedOrder,
        SimulatorConfig, ZeroJitter, calculate_order_impact,
    };
    use std::sync::Arc;

    fn level(price: f64, size: f64) -> PriceLevel {
        PriceLevel { price, size }
    }

    fn deep_book() -> OrderBookSnapshot {
        let bids = (0..20)
            .map(|i| level(49_999.0 - i as f64, 1.0 + i as f64 * 0.1))
            .collect();
        let asks = (0..20)
            .map(|i| level(50_001.0 + i as f64, 1.0 + i as f64 * 0.1))
            .collect();
        OrderBookSnapshot::from_levels("BTC-USDT", bids, asks)
    }

    fn simulator() -> ImpactSimulator {
        ImpactSimulator::with_jitter(SimulatorConfig::default(), Arc::new(ZeroJitter))
    }

    #[test]
    fn test_larger_orders_consume_more_levels() {
        let book = deep_book();
        let sim = simulator();

        let mut previous_levels = 0;
        let mut previous_slippage = -1.0;
        for quantity in [0.5, 2.0, 5.0, 10.0, 20.0] {
            let result = sim
                .simulate(&SimulatedOrder::market(Side::Buy, quantity), &book)
                .unwrap();
            assert!(result.levels_consumed >= previous_levels);
            assert!(result.slippage_pct >= previous_slippage);
            previous_levels = result.levels_consumed;
            previous_slippage = result.slippage_pct;
        }
    }

    #[test]
    fn test_fill_pct_bounds() {
        let book = deep_book();
        let total = book.total_ask_volume();
        let sim = simulator();

        let within = sim
            .simulate(&SimulatedOrder::market(Side::Buy, total / 2.0), &book)
            .unwrap();
        assert_eq!(within.estimated_fill_pct, 100.0);

        let beyond = sim
            .simulate(&SimulatedOrder::market(Side::Buy, total * 2.0), &book)
            .unwrap();
        assert!(beyond.estimated_fill_pct < 100.0);
        assert!(beyond.estimated_fill_pct > 0.0);
        assert_eq!(beyond.levels_consumed, book.asks.len());
        assert!((beyond.market_impact_pct - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_to_fill_grows_with_levels() {
        let book = deep_book();
        let sim = simulator();
        let small = sim
            .simulate(&SimulatedOrder::market(Side::Sell, 0.5), &book)
            .unwrap();
        let large = sim
            .simulate(&SimulatedOrder::market(Side::Sell, 10.0), &book)
            .unwrap();

        assert_eq!(small.estimated_time_to_fill_ms, 1000.0);
        assert_eq!(
            large.estimated_time_to_fill_ms,
            large.levels_consumed as f64 * 1000.0
        );
    }

    #[test]
    fn test_free_function_matches_simulator() {
        let book = deep_book();
        let config = SimulatorConfig::default();
        let jitter = FixedJitter(123.0);

        let direct = calculate_order_impact(
            Side::Buy,
            3.3,
            Some(50_010.0),
            &book.asks,
            &config,
            &jitter,
        )
        .unwrap();
        let via_simulator = ImpactSimulator::with_jitter(config, Arc::new(jitter))
            .simulate(&SimulatedOrder::limit(Side::Buy, 3.3, 50_010.0), &book)
            .unwrap();

        assert_eq!(direct, via_simulator);
    }

    #[test]
    fn test_config_from_json_drives_simulation() {
        let config = SimulatorConfig::from_json(r#"{"time_per_level_ms": 10.0, "max_jitter_ms": 0.0}"#)
            .unwrap();
        assert_eq!(config.history_capacity, 10);

        let sim = ImpactSimulator::new(config);
        let result = sim
            .simulate(&SimulatedOrder::market(Side::Buy, 2.5), &deep_book())
            .unwrap();
        assert_eq!(result.estimated_time_to_fill_ms, 30.0);
    }

    #[test]
    fn test_snapshot_json_round_trip_keeps_results() {
        let book = deep_book();
        let restored = OrderBookSnapshot::from_json(&book.to_json().unwrap()).unwrap();
        let sim = simulator();
        let order = SimulatedOrder::market(Side::Sell, 7.0);

        assert_eq!(
            sim.simulate(&order, &book).unwrap(),
            sim.simulate(&order, &restored).unwrap()
        );
    }
}
