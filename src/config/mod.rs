//! Simulator configuration

mod error;
mod settings;
mod tests;

pub use error::ConfigError;
pub use settings::SimulatorConfig;
