use bevy_ecs::prelude::{Res, ResMut};

use crate::agents::PendingPassengers;
use crate::clock::EpisodeClock;
use crate::demand::DemandGenerator;
use crate::episode::EpisodeRng;
use crate::spatial::ZoneGrid;
use crate::telemetry::EpisodeTelemetry;

/// Sample this step's arrivals and append them to the back of the queue.
pub fn demand_system(
    clock: Res<EpisodeClock>,
    grid: Res<ZoneGrid>,
    mut generator: ResMut<DemandGenerator>,
    mut rng: ResMut<EpisodeRng>,
    mut pending: ResMut<PendingPassengers>,
    mut telemetry: ResMut<EpisodeTelemetry>,
) {
    let arrivals = generator.generate(clock.hour_of_day(), &grid, &mut rng.0);
    telemetry.passengers_generated += arrivals.len() as u64;
    pending.0.extend(arrivals);
}
