//! Action sources for an episode.
//!
//! A policy sees the latest observation and returns the next step's action:
//! one incentive per zone plus the index of the driver to dispatch.

use market_core::{Observation, StepAction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait EpisodePolicy {
    fn act(&mut self, observation: &Observation) -> StepAction;
}

/// Upper bound of the sampled incentive range.
pub const DEFAULT_MAX_INCENTIVE: f64 = 10.0;

/// Samples incentives uniformly in `[0, max_incentive]` and a uniform driver.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
    max_incentive: f64,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_incentive: DEFAULT_MAX_INCENTIVE,
        }
    }

    pub fn with_max_incentive(mut self, max_incentive: f64) -> Self {
        self.max_incentive = max_incentive.max(0.0);
        self
    }
}

impl EpisodePolicy for RandomPolicy {
    fn act(&mut self, observation: &Observation) -> StepAction {
        let zones = observation.demand_density.len();
        let drivers = observation.driver_positions.len();
        let incentives = (0..zones)
            .map(|_| self.rng.gen_range(0.0..=self.max_incentive))
            .collect();
        let selected_driver = if drivers == 0 {
            0
        } else {
            self.rng.gen_range(0..drivers)
        };
        StepAction::new(incentives, selected_driver)
    }
}

/// Replays a fixed list of actions, wrapping around at the end.
/// An empty script yields the zero action.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPolicy {
    actions: Vec<StepAction>,
    cursor: usize,
}

impl ScriptedPolicy {
    pub fn new(actions: Vec<StepAction>) -> Self {
        Self { actions, cursor: 0 }
    }
}

impl EpisodePolicy for ScriptedPolicy {
    fn act(&mut self, _observation: &Observation) -> StepAction {
        if self.actions.is_empty() {
            return StepAction::default();
        }
        let action = self.actions[self.cursor % self.actions.len()].clone();
        self.cursor += 1;
        action
    }
}
