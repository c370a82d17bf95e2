//! Supported exchanges and the presets offered to the user

use super::error::FeedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a supported exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeId {
    /// OKX
    Okx,
    /// Bybit
    Bybit,
    /// Deribit
    Deribit,
}

impl ExchangeId {
    /// Every supported exchange
    pub const ALL: [ExchangeId; 3] = [ExchangeId::Okx, ExchangeId::Bybit, ExchangeId::Deribit];

    /// Lowercase identifier used in book keys
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeId::Okx => "okx",
            ExchangeId::Bybit => "bybit",
            ExchangeId::Deribit => "deribit",
        }
    }

    /// Static descriptor for this exchange
    pub fn descriptor(&self) -> &'static Exchange {
        match self {
            ExchangeId::Okx => &EXCHANGES[0],
            ExchangeId::Bybit => &EXCHANGES[1],
            ExchangeId::Deribit => &EXCHANGES[2],
        }
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExchangeId {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "okx" => Ok(ExchangeId::Okx),
            "bybit" => Ok(ExchangeId::Bybit),
            "deribit" => Ok(ExchangeId::Deribit),
            _ => Err(FeedError::UnknownExchange(s.to_string())),
        }
    }
}

/// Connection details and display metadata for one exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    /// Identifier
    pub id: ExchangeId,
    /// Human readable name
    pub name: &'static str,
    /// Public websocket endpoint
    pub ws_url: &'static str,
    /// REST endpoint
    pub rest_url: &'static str,
    /// Accent color used when displaying the exchange
    pub color: &'static str,
}

/// Descriptors for every supported exchange, in [`ExchangeId::ALL`] order
pub const EXCHANGES: [Exchange; 3] = [
    Exchange {
        id: ExchangeId::Okx,
        name: "OKX",
        ws_url: "wss://ws.okx.com:8443/ws/v5/public",
        rest_url: "https://www.okx.com/api/v5",
        color: "#00D4FF",
    },
    Exchange {
        id: ExchangeId::Bybit,
        name: "Bybit",
        ws_url: "wss://stream.bybit.com/v5/public/spot",
        rest_url: "https://api.bybit.com/v5",
        color: "#F7A600",
    },
    Exchange {
        id: ExchangeId::Deribit,
        name: "Deribit",
        ws_url: "wss://www.deribit.com/ws/api/v2",
        rest_url: "https://www.deribit.com/api/v2",
        color: "#FF6B6B",
    },
];

/// Symbols offered by default
pub const POPULAR_SYMBOLS: [&str; 6] = [
    "BTC-USDT", "ETH-USDT", "BTC-USD", "ETH-USD", "SOL-USDT", "ADA-USDT",
];

/// A named submission delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderDelay {
    /// Label shown to the user
    pub label: &'static str,
    /// Delay in milliseconds
    pub delay_ms: u64,
}

/// Delays offered when scheduling a simulation
pub const ORDER_DELAYS: [OrderDelay; 5] = [
    OrderDelay {
        label: "Immediate",
        delay_ms: 0,
    },
    OrderDelay {
        label: "5 seconds",
        delay_ms: 5_000,
    },
    OrderDelay {
        label: "10 seconds",
        delay_ms: 10_000,
    },
    OrderDelay {
        label: "30 seconds",
        delay_ms: 30_000,
    },
    OrderDelay {
        label: "1 minute",
        delay_ms: 60_000,
    },
];
