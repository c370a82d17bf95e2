//! Recorded messages through feed, state, scheduler and history

#[cfg(test)]
mod feed_pipeline_tests {
    use orderbook_sim::{
        BookKey, ExchangeId, FeedRunner, ImpactSimulator, MarketState, ReplayFeed, Side,
        SimulatedOrder, SimulationRequest, SimulationScheduler, SimulatorConfig, Submission,
        ZeroJitter,
    };
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    const BYBIT_MESSAGES: [&str; 3] = [
        r#"{"success":true,"op":"subscribe"}"#,
        r#"{"topic":"orderbook.50.BTCUSDT","data":{"s":"BTCUSDT","b":[["99","5"],["98","5"]],"a":[["101","2"],["102","3"]]}}"#,
        r#"{"topic":"orderbook.50.BTCUSDT","data":{"s":"BTCUSDT","b":[["99","5"]],"a":"broken"}}"#,
    ];

    fn run_to_completion(state: &Arc<MarketState>, feed: ReplayFeed) {
        let handle =
            FeedRunner::spawn(Arc::clone(state), Box::new(feed), Duration::from_millis(1)).unwrap();
        while !handle.is_finished() {
            thread::sleep(Duration::from_millis(1));
        }
        handle.join().unwrap();
    }

    #[test]
    fn test_replay_then_simulate() {
        let state = Arc::new(MarketState::default());
        run_to_completion(
            &state,
            ReplayFeed::new(ExchangeId::Bybit, "BTC-USDT", BYBIT_MESSAGES),
        );

        let key = BookKey::new(ExchangeId::Bybit, "BTC-USDT");
        let book = state.latest(&key).unwrap();
        assert_eq!(book.asks.len(), 2);
        assert_eq!(state.health(&key).unwrap().consecutive_failures, 1);

        let scheduler = SimulationScheduler::new(
            Arc::clone(&state),
            Arc::new(ImpactSimulator::with_jitter(
                SimulatorConfig::default(),
                Arc::new(ZeroJitter),
            )),
        );
        let submission = scheduler
            .submit(SimulationRequest::new(
                key.clone(),
                SimulatedOrder::limit(Side::Buy, 4.0, 101.0),
            ))
            .ok()
            .unwrap();

        let record = match submission {
            Submission::Executed(record) => record,
            Submission::Scheduled(_) => panic!("expected immediate execution"),
        };
        assert_eq!(record.result.levels_consumed, 2);
        assert_eq!(record.result.average_fill_price, 101.5);

        let highlighted = state.simulation_at_price(&key, Side::Buy, 101.0).unwrap();
        assert_eq!(highlighted.id, record.id);
    }

    #[test]
    fn test_books_are_kept_per_exchange() {
        let state = Arc::new(MarketState::default());
        run_to_completion(
            &state,
            ReplayFeed::new(
                ExchangeId::Okx,
                "BTC-USDT",
                [r#"{"data":[{"bids":[["10","1"]],"asks":[["11","1"]]}]}"#],
            ),
        );
        run_to_completion(
            &state,
            ReplayFeed::new(
                ExchangeId::Deribit,
                "BTC-USDT",
                [r#"{"params":{"data":{"bids":[[20.0,1.0]],"asks":[[21.0,1.0]]}}}"#],
            ),
        );

        let okx = state.latest(&BookKey::new(ExchangeId::Okx, "BTC-USDT")).unwrap();
        let deribit = state
            .latest(&BookKey::new(ExchangeId::Deribit, "BTC-USDT"))
            .unwrap();
        assert_eq!(okx.mid_price(), 10.5);
        assert_eq!(deribit.mid_price(), 20.5);
        assert_eq!(state.book_keys().len(), 2);
    }
}
