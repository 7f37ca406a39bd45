//! Episode harness for the ride-hailing market simulation.
//!
//! Drives full days of [`market_core::Episode`] with a pluggable policy,
//! records per-step history, runs independent episodes in parallel and
//! exports the results.
//!
//! # Quick Start
//!
//! ```no_run
//! use market_core::MarketConfig;
//! use market_experiments::{export_history_to_csv, run_parallel_episodes};
//!
//! let runs = run_parallel_episodes(&MarketConfig::default(), &[1, 2, 3, 4], None, false)
//!     .expect("episodes");
//! export_history_to_csv(&runs, "history.csv").expect("csv");
//! ```
//!
//! # Architecture
//!
//! - [`policy`]: action sources (random and scripted)
//! - [`history`]: per-step records and end-of-day summaries
//! - [`runner`]: single and parallel episode execution using rayon
//! - [`export`]: history to CSV, summaries to JSON

pub mod export;
pub mod history;
pub mod policy;
pub mod runner;

pub use export::{export_history_to_csv, export_summaries_to_json};
pub use history::{EpisodeHistory, EpisodeSummary, HistoryRow};
pub use policy::{EpisodePolicy, RandomPolicy, ScriptedPolicy};
pub use runner::{run_episode, run_parallel_episodes, run_parallel_episodes_with_policy, EpisodeRun};
