//! Core of a one-day ride-hailing market simulation.
//!
//! A day is 288 steps of 5 simulated minutes. Each step advances the clock,
//! ages the pending queue, samples Poisson demand, resolves at most one
//! dispatch and scores it on four objectives (profit, passenger wait, driver
//! utility/fatigue, compliance with the zone incentive signal). The
//! [`episode::Episode`] type exposes this as `reset` / `step`.

pub mod agents;
pub mod clock;
pub mod config;
pub mod demand;
pub mod dispatch;
pub mod episode;
pub mod error;
pub mod fatigue;
pub mod incentives;
pub mod observation;
pub mod reward;
pub mod runner;
pub mod spatial;
pub mod systems;
pub mod telemetry;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use config::MarketConfig;
pub use episode::{Episode, StepAction, StepResult};
pub use error::ConfigError;
pub use observation::Observation;
