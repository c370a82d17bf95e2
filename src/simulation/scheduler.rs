//! Immediate and delayed simulation submission

use super::error::SimulationError;
use super::history::SimulationRecord;
use super::impact::ImpactSimulator;
use super::order::SimulatedOrder;
use crate::state::{BookKey, MarketState};
use crate::utils::current_time_millis;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, warn};

/// An order to evaluate against a particular book
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    /// Book to evaluate against
    pub key: BookKey,
    /// The order
    pub order: SimulatedOrder,
}

impl SimulationRequest {
    /// Create a request
    pub fn new(key: BookKey, order: SimulatedOrder) -> Self {
        Self { key, order }
    }
}

/// A simulation waiting for its delay to elapse
pub struct ScheduledSimulation {
    fire_at: u64,
    handle: JoinHandle<Result<SimulationRecord, SimulationError>>,
}

impl ScheduledSimulation {
    /// When the simulation runs (milliseconds since epoch)
    pub fn fire_at(&self) -> u64 {
        self.fire_at
    }

    /// Whether the simulation has run
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the simulation and return its archived record
    pub fn join(self) -> Result<SimulationRecord, SimulationError> {
        self.handle.join().map_err(|_| SimulationError::Scheduler {
            message: "delayed simulation panicked".to_string(),
        })?
    }
}

/// Outcome of [`SimulationScheduler::submit`]
pub enum Submission {
    /// The order had no delay and was evaluated right away
    Executed(SimulationRecord),
    /// The order runs later on its own thread
    Scheduled(ScheduledSimulation),
}

/// Runs simulations against the latest snapshots in a [`MarketState`] and
/// archives the results.
///
/// Delayed orders are evaluated against the snapshot current when their
/// delay elapses, not the one current at submission.
#[derive(Debug, Clone)]
pub struct SimulationScheduler {
    state: Arc<MarketState>,
    simulator: Arc<ImpactSimulator>,
}

impl SimulationScheduler {
    /// Create a scheduler
    pub fn new(state: Arc<MarketState>, simulator: Arc<ImpactSimulator>) -> Self {
        Self { state, simulator }
    }

    /// Get the shared state
    pub fn state(&self) -> &Arc<MarketState> {
        &self.state
    }

    /// Validate `request` and either run it now or schedule it.
    ///
    /// Invalid orders are rejected here, before any delay starts.
    pub fn submit(&self, request: SimulationRequest) -> Result<Submission, SimulationError> {
        request.order.validate()?;

        if request.order.delay_ms == 0 {
            return run(&self.state, &self.simulator, &request).map(Submission::Executed);
        }

        let delay = request.order.delay_ms;
        let fire_at = current_time_millis().saturating_add(delay);
        info!(
            "Simulation of {} on {} scheduled in {}ms",
            request.order, request.key, delay
        );

        let state = Arc::clone(&self.state);
        let simulator = Arc::clone(&self.simulator);
        let handle = thread::Builder::new()
            .name(format!("delayed-sim-{}", request.key))
            .spawn(move || {
                thread::sleep(Duration::from_millis(delay));
                run(&state, &simulator, &request)
            })
            .map_err(|err| SimulationError::Scheduler {
                message: err.to_string(),
            })?;

        Ok(Submission::Scheduled(ScheduledSimulation { fire_at, handle }))
    }
}

fn run(
    state: &MarketState,
    simulator: &ImpactSimulator,
    request: &SimulationRequest,
) -> Result<SimulationRecord, SimulationError> {
    let Some(book) = state.latest(&request.key) else {
        warn!("No book for {}, simulation of {} dropped", request.key, request.order);
        return Err(SimulationError::NoOrderBook(request.key.to_string()));
    };

    let result = simulator.simulate(&request.order, &book)?;
    let record = SimulationRecord::new(
        request.key.exchange,
        &request.key.symbol,
        request.order.clone(),
        result,
    );
    debug!(
        "Simulation {} on {}: fill {:.2}%, slippage {:.4}%, impact {:.2}%",
        record.id,
        request.key,
        result.estimated_fill_pct,
        result.slippage_pct,
        result.market_impact_pct
    );
    state.record_simulation(record.clone());
    Ok(record)
}
