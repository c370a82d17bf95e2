//! Archive of past simulations, newest first

use super::impact::SimulationResult;
use super::order::SimulatedOrder;
use crate::feed::ExchangeId;
use crate::utils::current_time_millis;
use pricelevel::Side;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::trace;
use uuid::Uuid;

/// Default number of simulations kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Two prices closer than this are treated as the same book row
pub const PRICE_MATCH_TOLERANCE: f64 = 0.01;

/// A simulation paired with the order that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    /// Unique identity of the entry
    pub id: Uuid,
    /// Exchange whose book was used
    pub exchange: ExchangeId,
    /// Symbol whose book was used
    pub symbol: String,
    /// The simulated order
    pub order: SimulatedOrder,
    /// What the simulator predicted
    pub result: SimulationResult,
    /// Creation time (milliseconds since epoch)
    pub timestamp: u64,
}

impl SimulationRecord {
    /// Create a record with a fresh id stamped with the current time
    pub fn new(
        exchange: ExchangeId,
        symbol: &str,
        order: SimulatedOrder,
        result: SimulationResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            exchange,
            symbol: symbol.to_string(),
            order,
            result,
            timestamp: current_time_millis(),
        }
    }
}

/// Bounded list of simulation records.
///
/// New records go to the front; once `capacity` is reached the oldest record
/// is evicted.
#[derive(Debug, Clone)]
pub struct SimulationHistory {
    records: VecDeque<SimulationRecord>,
    capacity: usize,
}

impl SimulationHistory {
    /// Create an empty history; a capacity of zero is raised to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of records kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add a record as the newest entry
    pub fn push(&mut self, record: SimulationRecord) {
        trace!("History: adding simulation {}", record.id);
        self.records.push_front(record);
        while self.records.len() > self.capacity {
            if let Some(evicted) = self.records.pop_back() {
                trace!("History: evicted simulation {}", evicted.id);
            }
        }
    }

    /// Remove the record with `id`, returning whether one was removed
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record
    pub fn latest(&self) -> Option<&SimulationRecord> {
        self.records.front()
    }

    /// Look up a record by id
    pub fn get(&self, id: Uuid) -> Option<&SimulationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Iterate newest first
    pub fn iter(&self) -> impl Iterator<Item = &SimulationRecord> {
        self.records.iter()
    }

    /// Newest record for `exchange`/`symbol`/`side` whose price sits within
    /// [`PRICE_MATCH_TOLERANCE`] of `price`. Orders without a price compare
    /// as `0`.
    pub fn find_at_price(
        &self,
        exchange: ExchangeId,
        symbol: &str,
        side: Side,
        price: f64,
    ) -> Option<&SimulationRecord> {
        self.records.iter().find(|record| {
            record.exchange == exchange
                && record.symbol == symbol
                && record.order.side == side
                && (record.order.limit_price.unwrap_or(0.0) - price).abs() < PRICE_MATCH_TOLERANCE
        })
    }

    /// Serialize the records, newest first, to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }
}

impl Default for SimulationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
