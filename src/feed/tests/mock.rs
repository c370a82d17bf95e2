#[cfg(test)]
mod tests {
    use crate::feed::{BookSource, DEFAULT_MOCK_LEVELS, FeedEvent, MockFeed};
    use crate::ExchangeId;

    #[test]
    fn test_generates_sorted_book() {
        let mut feed = MockFeed::with_seed(ExchangeId::Okx, "BTC-USDT", 7);
        let book = feed.generate();

        assert_eq!(book.symbol, "BTC-USDT");
        assert_eq!(book.bids.len(), DEFAULT_MOCK_LEVELS);
        assert_eq!(book.asks.len(), DEFAULT_MOCK_LEVELS);
        assert!(book.bids.windows(2).all(|w| w[0].price >= w[1].price));
        assert!(book.asks.windows(2).all(|w| w[0].price <= w[1].price));
        assert!(!book.is_crossed());
    }

    #[test]
    fn test_sizes_and_prices_in_range() {
        let mut feed = MockFeed::with_seed(ExchangeId::Bybit, "ETH-USDT", 1);
        for _ in 0..20 {
            let book = feed.generate();
            for level in book.bids.iter().chain(book.asks.iter()) {
                assert!(level.size >= 0.1 && level.size < 10.1);
                assert!(level.is_valid());
            }
            let best_ask = book.best_ask().unwrap().price;
            assert!((50_000.0..60_000.0 + 11.0).contains(&best_ask));
        }
    }

    #[test]
    fn test_same_seed_same_books() {
        let mut a = MockFeed::with_seed(ExchangeId::Okx, "BTC-USDT", 99);
        let mut b = MockFeed::with_seed(ExchangeId::Okx, "BTC-USDT", 99);
        let (first, second) = (a.generate(), b.generate());
        assert_eq!(first.bids, second.bids);
        assert_eq!(first.asks, second.asks);
    }

    #[test]
    fn test_custom_levels_and_fixed_price() {
        let mut feed = MockFeed::with_seed(ExchangeId::Deribit, "BTC-USD", 3)
            .with_levels(5)
            .with_price_range(100.0, 0.0);
        let book = feed.generate();

        assert_eq!(book.bids.len(), 5);
        assert!(book.best_bid().unwrap().price < 100.0);
        assert!(book.best_ask().unwrap().price > 100.0);
        // Bids never go below zero
        assert!(book.bids.iter().all(|l| l.price >= 0.0));
    }

    #[test]
    fn test_poll_always_yields_snapshot() {
        let mut feed = MockFeed::new(ExchangeId::Okx, "BTC-USDT");
        assert_eq!(feed.exchange(), ExchangeId::Okx);
        assert_eq!(feed.symbol(), "BTC-USDT");
        for _ in 0..3 {
            assert!(matches!(feed.poll(), FeedEvent::Snapshot(_)));
        }
    }
}
