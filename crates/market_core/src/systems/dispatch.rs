use bevy_ecs::prelude::{Res, ResMut};

use crate::agents::{Fleet, PendingPassengers};
use crate::clock::EpisodeClock;
use crate::config::MarketConfig;
use crate::dispatch::resolve;
use crate::episode::{LastDispatch, StepAction};
use crate::incentives::IncentiveVector;
use crate::telemetry::EpisodeTelemetry;

/// Resolve at most one dispatch for this step and publish the outcome.
#[allow(clippy::too_many_arguments)]
pub fn dispatch_system(
    clock: Res<EpisodeClock>,
    config: Res<MarketConfig>,
    action: Res<StepAction>,
    incentives: Res<IncentiveVector>,
    mut fleet: ResMut<Fleet>,
    mut pending: ResMut<PendingPassengers>,
    mut last: ResMut<LastDispatch>,
    mut telemetry: ResMut<EpisodeTelemetry>,
) {
    let outcome = resolve(
        &mut fleet.0,
        &mut pending.0,
        action.selected_driver,
        &incentives,
        &config.reward,
        config.hours_per_trip,
    );
    telemetry.record_dispatch(clock.step_index(), &outcome);
    last.0 = Some(outcome);
}
