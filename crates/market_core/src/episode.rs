//! Episode orchestrator: the `reset` / `step` surface for the control harness.
//!
//! All episode state (fleet, queue, clock, incentives, RNG, telemetry) lives as
//! resources in a [`World`] owned by the [`Episode`]. Nothing is global, so
//! independent episodes can run side by side with independent random streams.

use bevy_ecs::prelude::{Resource, Schedule, World};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::agents::{Driver, Fleet, PendingPassengers};
use crate::clock::{EpisodeClock, EpisodeStatus};
use crate::config::MarketConfig;
use crate::demand::DemandGenerator;
use crate::dispatch::DispatchOutcome;
use crate::error::ConfigError;
use crate::incentives::IncentiveVector;
use crate::observation::{LatestObservation, Observation};
use crate::reward::WeightedReward;
use crate::runner::{run_step, step_schedule};
use crate::spatial::ZoneGrid;
use crate::telemetry::EpisodeTelemetry;

/// The caller's action for one step: per-zone incentives and the index of the
/// driver to dispatch (reduced modulo the fleet size).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Resource)]
pub struct StepAction {
    pub incentives: Vec<f64>,
    pub selected_driver: usize,
}

impl StepAction {
    pub fn new(incentives: Vec<f64>, selected_driver: usize) -> Self {
        Self {
            incentives,
            selected_driver,
        }
    }
}

/// Random stream for one episode: fleet placement and demand.
#[derive(Debug, Clone, Resource)]
pub struct EpisodeRng(pub StdRng);

/// Outcome of the most recent dispatch attempt.
#[derive(Debug, Clone, Default, Resource)]
pub struct LastDispatch(pub Option<DispatchOutcome>);

impl LastDispatch {
    /// Take this step's outcome. [`DispatchOutcome::NotResolved`] when the
    /// dispatch system did not publish one.
    pub fn take_outcome(&mut self) -> DispatchOutcome {
        self.0.take().unwrap_or_else(|| {
            log::error!("dispatch system published no outcome this step");
            DispatchOutcome::NotResolved
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: WeightedReward,
    pub terminated: bool,
    pub outcome: DispatchOutcome,
}

impl StepResult {
    pub fn total_reward(&self) -> f64 {
        self.reward.total()
    }

    /// Unweighted components plus the `dispatched` flag.
    pub fn diagnostics(&self) -> BTreeMap<&'static str, f64> {
        self.outcome.diagnostics()
    }
}

pub struct Episode {
    config: MarketConfig,
    world: World,
    schedule: Schedule,
}

impl Episode {
    /// Validates `config` and performs an unseeded reset so the episode can be
    /// stepped right away.
    pub fn new(config: MarketConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut episode = Self {
            config,
            world: World::new(),
            schedule: step_schedule(),
        };
        episode.reset(None);
        Ok(episode)
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Discard all fleet and queue state and start a new day at step 0.
    /// A seed makes the whole trajectory reproducible for a fixed action script.
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = ZoneGrid::new(self.config.grid_size);
        let fleet: Vec<Driver> = (0..self.config.num_drivers)
            .map(|id| Driver::new(id as u32, grid.random_position(&mut rng)))
            .collect();

        let mut world = World::new();
        world.insert_resource(self.config.clone());
        world.insert_resource(EpisodeClock::default());
        world.insert_resource(grid);
        world.insert_resource(Fleet(fleet));
        world.insert_resource(PendingPassengers::default());
        world.insert_resource(IncentiveVector::zeros(grid.num_zones()));
        world.insert_resource(DemandGenerator::new(self.config.demand.clone()));
        world.insert_resource(EpisodeRng(rng));
        world.insert_resource(StepAction::default());
        world.insert_resource(LastDispatch::default());
        world.insert_resource(EpisodeTelemetry::default());

        let observation = Observation::from_world(&world);
        world.insert_resource(LatestObservation(observation.clone()));

        self.world = world;
        // Systems bind to the world they first ran on.
        self.schedule = step_schedule();

        log::info!(
            "episode reset: seed={:?} drivers={} zones={}",
            seed,
            self.config.num_drivers,
            grid.num_zones()
        );
        observation
    }

    /// Advance one 5-minute tick.
    pub fn step(&mut self, incentives: &[f64], selected_driver: usize) -> StepResult {
        self.step_action(StepAction::new(incentives.to_vec(), selected_driver))
    }

    pub fn step_action(&mut self, action: StepAction) -> StepResult {
        if !run_step(&mut self.world, &mut self.schedule, action) {
            log::warn!("step called on a terminated episode; ignoring");
            return StepResult {
                observation: self.observation(),
                reward: WeightedReward::default(),
                terminated: true,
                outcome: DispatchOutcome::EpisodeOver,
            };
        }

        let outcome = self
            .world
            .resource_mut::<LastDispatch>()
            .take_outcome();
        let observation = self.observation();
        let terminated = self.status() == EpisodeStatus::Terminated;
        log::trace!(
            "step {}: {} pending, outcome {}, reward {:.3}",
            observation.step,
            observation.total_demand(),
            outcome.label(),
            outcome.reward().total()
        );

        StepResult {
            observation,
            reward: outcome.reward(),
            terminated,
            outcome,
        }
    }

    /// Latest snapshot, without advancing.
    pub fn observation(&self) -> Observation {
        self.world.resource::<LatestObservation>().0.clone()
    }

    pub fn clock(&self) -> EpisodeClock {
        *self.world.resource::<EpisodeClock>()
    }

    pub fn status(&self) -> EpisodeStatus {
        self.clock().status()
    }

    pub fn fleet(&self) -> &Fleet {
        self.world.resource::<Fleet>()
    }

    pub fn pending(&self) -> &PendingPassengers {
        self.world.resource::<PendingPassengers>()
    }

    pub fn incentives(&self) -> &IncentiveVector {
        self.world.resource::<IncentiveVector>()
    }

    pub fn telemetry(&self) -> &EpisodeTelemetry {
        self.world.resource::<EpisodeTelemetry>()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct access for scripted scenarios (e.g. marking a driver busy).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
