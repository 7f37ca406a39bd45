use bevy_ecs::prelude::{Res, ResMut};

use crate::agents::{Fleet, PendingPassengers};
use crate::clock::EpisodeClock;
use crate::observation::{LatestObservation, Observation};
use crate::spatial::ZoneGrid;

/// Last system of every step: capture the observation snapshot.
pub fn capture_observation_system(
    clock: Res<EpisodeClock>,
    grid: Res<ZoneGrid>,
    fleet: Res<Fleet>,
    pending: Res<PendingPassengers>,
    mut latest: ResMut<LatestObservation>,
) {
    latest.0 = Observation::capture(&clock, &grid, &fleet, &pending);
}
