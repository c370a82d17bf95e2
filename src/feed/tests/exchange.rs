#[cfg(test)]
mod tests {
    use crate::feed::{EXCHANGES, ExchangeId, FeedError, ORDER_DELAYS, POPULAR_SYMBOLS};
    use std::str::FromStr;

    #[test]
    fn test_descriptors_match_ids() {
        for (id, exchange) in ExchangeId::ALL.iter().zip(EXCHANGES.iter()) {
            assert_eq!(*id, exchange.id);
            assert_eq!(id.descriptor(), exchange);
        }
        assert_eq!(ExchangeId::Bybit.descriptor().name, "Bybit");
        assert!(ExchangeId::Okx.descriptor().ws_url.starts_with("wss://"));
    }

    #[test]
    fn test_display_and_parse() {
        for id in ExchangeId::ALL {
            assert_eq!(ExchangeId::from_str(&id.to_string()).unwrap(), id);
        }
        assert_eq!("  OKX ".parse::<ExchangeId>().unwrap(), ExchangeId::Okx);
    }

    #[test]
    fn test_unknown_exchange() {
        let err = "binance".parse::<ExchangeId>().unwrap_err();
        assert!(matches!(err, FeedError::UnknownExchange(ref name) if name == "binance"));
        assert_eq!(err.to_string(), "Unknown exchange: binance");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExchangeId::Deribit).unwrap(),
            "\"deribit\""
        );
        let id: ExchangeId = serde_json::from_str("\"bybit\"").unwrap();
        assert_eq!(id, ExchangeId::Bybit);
    }

    #[test]
    fn test_presets() {
        assert_eq!(POPULAR_SYMBOLS[0], "BTC-USDT");
        assert_eq!(POPULAR_SYMBOLS.len(), 6);
        assert_eq!(ORDER_DELAYS[0].delay_ms, 0);
        assert!(ORDER_DELAYS.windows(2).all(|w| w[0].delay_ms < w[1].delay_ms));
        assert_eq!(ORDER_DELAYS[4].delay_ms, 60_000);
    }
}
