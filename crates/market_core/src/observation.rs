//! Observation snapshot handed to the caller after `reset` and every `step`.

use bevy_ecs::prelude::{Resource, World};
use serde::{Deserialize, Serialize};

use crate::agents::{Fleet, PendingPassengers};
use crate::clock::EpisodeClock;
use crate::spatial::ZoneGrid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub step: u32,
    pub time_of_day_hours: f64,
    pub driver_positions: Vec<[f64; 2]>,
    /// Recomputed from driving hours at capture time.
    pub driver_fatigues: Vec<f64>,
    /// Pending passengers per destination zone.
    pub demand_density: Vec<u32>,
    /// Pending passengers per zone containing their pickup point.
    pub pickup_density: Vec<u32>,
}

impl Observation {
    pub fn capture(
        clock: &EpisodeClock,
        grid: &ZoneGrid,
        fleet: &Fleet,
        pending: &PendingPassengers,
    ) -> Self {
        Self {
            step: clock.step_index(),
            time_of_day_hours: clock.time_of_day_hours(),
            driver_positions: fleet.drivers().iter().map(|d| d.position.as_array()).collect(),
            driver_fatigues: fleet.drivers().iter().map(|d| d.fatigue_score()).collect(),
            demand_density: grid.count_by_zone(pending.iter().map(|p| p.destination_zone)),
            pickup_density: grid.count_by_zone(pending.iter().map(|p| grid.zone_of(&p.pickup))),
        }
    }

    /// Capture straight from the episode world.
    pub fn from_world(world: &World) -> Self {
        Self::capture(
            world.resource::<EpisodeClock>(),
            world.resource::<ZoneGrid>(),
            world.resource::<Fleet>(),
            world.resource::<PendingPassengers>(),
        )
    }

    pub fn total_demand(&self) -> u32 {
        self.demand_density.iter().sum()
    }

    pub fn mean_fatigue(&self) -> f64 {
        if self.driver_fatigues.is_empty() {
            return 0.0;
        }
        self.driver_fatigues.iter().sum::<f64>() / self.driver_fatigues.len() as f64
    }
}

/// Snapshot written by the last step.
#[derive(Debug, Clone, Default, Resource)]
pub struct LatestObservation(pub Observation);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{Driver, Passenger, Position};

    #[test]
    fn densities_count_pending_passengers() {
        let grid = ZoneGrid::new(2);
        let fleet = Fleet(vec![
            Driver::new(0, Position::new(0.5, 0.5)).with_hours_driven(6.0),
            Driver::new(1, Position::new(1.5, 1.5)),
        ]);
        let mut pending = PendingPassengers::default();
        pending.0.push_back(Passenger::new(0, Position::new(0.2, 0.2), 3));
        pending.0.push_back(Passenger::new(1, Position::new(1.2, 0.2), 3));
        pending.0.push_back(Passenger::new(2, Position::new(1.2, 1.8), 0));

        let obs = Observation::capture(&EpisodeClock::default(), &grid, &fleet, &pending);
        assert_eq!(obs.step, 0);
        assert_eq!(obs.time_of_day_hours, 0.0);
        assert_eq!(obs.driver_positions, vec![[0.5, 0.5], [1.5, 1.5]]);
        assert_eq!(obs.driver_fatigues, vec![0.5, 0.0]);
        assert_eq!(obs.demand_density, vec![1, 0, 0, 2]);
        assert_eq!(obs.pickup_density, vec![1, 1, 0, 1]);
        assert_eq!(obs.total_demand(), 3);
        assert_eq!(obs.mean_fatigue(), 0.25);
    }
}
