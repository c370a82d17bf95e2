//! Impact simulation: the liquidity walk, hypothetical orders, the archive of
//! past results and the scheduler for delayed evaluation.

mod error;
mod history;
mod impact;
mod jitter;
mod order;
mod scheduler;
mod tests;

pub use error::SimulationError;
pub use history::{
    DEFAULT_HISTORY_CAPACITY, PRICE_MATCH_TOLERANCE, SimulationHistory, SimulationRecord,
};
pub use impact::{
    ImpactSimulator, LiquidityWalk, SimulationResult, calculate_order_impact, walk_liquidity,
};
pub use jitter::{FixedJitter, FnJitter, JitterSource, RandomJitter, ZeroJitter};
pub use order::{OrderKind, SimulatedOrder};
pub use scheduler::{ScheduledSimulation, SimulationRequest, SimulationScheduler, Submission};
