//! Per-step episode history and end-of-day summaries.

use market_core::telemetry::EpisodeTelemetry;
use market_core::StepResult;
use serde::{Deserialize, Serialize};

/// One step of an episode as seen by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub time_step: u32,
    pub total_reward: f64,
    /// Mean fleet fatigue after the step.
    pub avg_fatigue: f64,
    /// Pending passengers after the step.
    pub demand_count: u32,
    pub dispatched: bool,
}

impl HistoryRow {
    pub fn from_step(result: &StepResult) -> Self {
        Self {
            time_step: result.observation.step,
            total_reward: result.total_reward(),
            avg_fatigue: result.observation.mean_fatigue(),
            demand_count: result.observation.total_demand(),
            dispatched: result.outcome.is_serviced(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeHistory {
    rows: Vec<HistoryRow>,
}

impl EpisodeHistory {
    pub fn record(&mut self, result: &StepResult) {
        self.rows.push(HistoryRow::from_step(result));
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cumulative_reward(&self) -> f64 {
        self.rows.iter().map(|r| r.total_reward).sum()
    }
}

/// End-of-day KPIs for one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub seed: u64,
    pub steps: usize,
    pub cumulative_reward: f64,
    /// Mean over steps of the per-step mean fleet fatigue.
    pub mean_fatigue: f64,
    /// Highest per-step mean fleet fatigue.
    pub max_fatigue: f64,
    pub peak_demand: u32,
    pub serviced_trips: usize,
    pub busy_driver_noops: u64,
    pub empty_queue_noops: u64,
    pub passengers_generated: u64,
    pub mean_wait_steps: Option<f64>,
}

impl EpisodeSummary {
    pub fn from_history(seed: u64, history: &EpisodeHistory, telemetry: &EpisodeTelemetry) -> Self {
        let rows = history.rows();
        let mean_fatigue = if rows.is_empty() {
            0.0
        } else {
            rows.iter().map(|r| r.avg_fatigue).sum::<f64>() / rows.len() as f64
        };
        Self {
            seed,
            steps: rows.len(),
            cumulative_reward: history.cumulative_reward(),
            mean_fatigue,
            max_fatigue: rows.iter().map(|r| r.avg_fatigue).fold(0.0, f64::max),
            peak_demand: rows.iter().map(|r| r.demand_count).max().unwrap_or(0),
            serviced_trips: telemetry.serviced_trips.len(),
            busy_driver_noops: telemetry.busy_driver_noops,
            empty_queue_noops: telemetry.empty_queue_noops,
            passengers_generated: telemetry.passengers_generated,
            mean_wait_steps: telemetry.mean_wait_steps(),
        }
    }
}
