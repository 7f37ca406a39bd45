use market_core::agents::{Passenger, Position};
use market_core::demand::DemandProfile;
use market_core::{Episode, MarketConfig, StepAction, StepResult};

/// Demand so low that no passenger arrives during a test run.
pub const NEGLIGIBLE_RATE: f64 = 1e-12;

/// Config whose demand generator stays silent, so tests control the queue.
pub fn quiet_config() -> MarketConfig {
    MarketConfig::default()
        .with_grid_size(3)
        .with_num_drivers(4)
        .with_demand_profile(DemandProfile {
            peak_rate: NEGLIGIBLE_RATE,
            off_peak_rate: NEGLIGIBLE_RATE,
            ..Default::default()
        })
}

/// Build an episode and reset it with `seed`.
pub fn seeded_episode(config: MarketConfig, seed: u64) -> Episode {
    let mut episode = Episode::new(config).expect("valid config");
    episode.reset(Some(seed));
    episode
}

/// Push a passenger onto the back of the pending queue.
pub fn enqueue(episode: &mut Episode, id: u64, pickup: Position, destination_zone: usize) {
    episode
        .world_mut()
        .resource_mut::<market_core::agents::PendingPassengers>()
        .0
        .push_back(Passenger::new(id, pickup, destination_zone));
}

/// Replay `actions` in order, stopping early if the episode ends.
pub fn run_script(episode: &mut Episode, actions: &[StepAction]) -> Vec<StepResult> {
    let mut results = Vec::with_capacity(actions.len());
    for action in actions {
        let result = episode.step_action(action.clone());
        let done = result.terminated;
        results.push(result);
        if done {
            break;
        }
    }
    results
}
