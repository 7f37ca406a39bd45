//! Telemetry / KPIs: records serviced trips and no-op dispatches for analysis.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::dispatch::{DispatchOutcome, ServicedTrip};
use crate::reward::RewardComponents;

/// One serviced trip, recorded at commit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicedTripRecord {
    pub step: u32,
    pub driver_id: u32,
    pub passenger_id: u64,
    pub wait_steps: u32,
    pub trip_distance: f64,
    pub pickup_distance: f64,
    pub components: RewardComponents,
    pub total_reward: f64,
}

impl ServicedTripRecord {
    pub fn from_trip(step: u32, trip: &ServicedTrip) -> Self {
        Self {
            step,
            driver_id: trip.driver_id,
            passenger_id: trip.passenger_id,
            wait_steps: trip.passenger_wait,
            trip_distance: trip.trip_distance,
            pickup_distance: trip.pickup_distance,
            components: trip.breakdown.components,
            total_reward: trip.breakdown.weighted.total(),
        }
    }
}

/// Collects episode telemetry. Discarded on reset.
#[derive(Debug, Clone, Default, Resource)]
pub struct EpisodeTelemetry {
    pub serviced_trips: Vec<ServicedTripRecord>,
    pub busy_driver_noops: u64,
    pub empty_queue_noops: u64,
    pub passengers_generated: u64,
}

impl EpisodeTelemetry {
    pub fn record_dispatch(&mut self, step: u32, outcome: &DispatchOutcome) {
        match outcome {
            DispatchOutcome::Serviced(trip) => {
                self.serviced_trips
                    .push(ServicedTripRecord::from_trip(step, trip));
            }
            DispatchOutcome::DriverBusy { .. } => self.busy_driver_noops += 1,
            DispatchOutcome::NoPendingPassengers => self.empty_queue_noops += 1,
            DispatchOutcome::EmptyFleet
            | DispatchOutcome::EpisodeOver
            | DispatchOutcome::NotResolved => {}
        }
    }

    pub fn total_reward(&self) -> f64 {
        self.serviced_trips.iter().map(|r| r.total_reward).sum()
    }

    /// Mean wait (steps) of serviced passengers; `None` before the first trip.
    pub fn mean_wait_steps(&self) -> Option<f64> {
        if self.serviced_trips.is_empty() {
            return None;
        }
        let total: u64 = self
            .serviced_trips
            .iter()
            .map(|r| u64::from(r.wait_steps))
            .sum();
        Some(total as f64 / self.serviced_trips.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_ops_are_counted_by_kind() {
        let mut telemetry = EpisodeTelemetry::default();
        telemetry.record_dispatch(1, &DispatchOutcome::NoPendingPassengers);
        telemetry.record_dispatch(2, &DispatchOutcome::DriverBusy { driver_index: 3 });
        telemetry.record_dispatch(3, &DispatchOutcome::DriverBusy { driver_index: 1 });
        telemetry.record_dispatch(4, &DispatchOutcome::EpisodeOver);

        assert_eq!(telemetry.empty_queue_noops, 1);
        assert_eq!(telemetry.busy_driver_noops, 2);
        assert!(telemetry.serviced_trips.is_empty());
        assert_eq!(telemetry.mean_wait_steps(), None);
        assert_eq!(telemetry.total_reward(), 0.0);
    }
}
