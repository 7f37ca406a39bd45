//! Dispatch resolution: at most one (driver, passenger) pair per step.
//!
//! The passenger is always the head of the pending queue. The driver is picked
//! by the caller; its index is reduced modulo the fleet size so any index
//! resolves. Only an idle driver is dispatched. Every other case is an explicit
//! zero-reward no-op that leaves the fleet and the queue untouched.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::agents::{Driver, Passenger};
use crate::incentives::IncentiveVector;
use crate::reward::{score, RewardBreakdown, RewardComponents, RewardConfig, WeightedReward};

/// One committed dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicedTrip {
    pub driver_index: usize,
    pub driver_id: u32,
    pub passenger_id: u64,
    pub passenger_wait: u32,
    pub destination_zone: usize,
    pub target_zone: Option<usize>,
    pub trip_distance: f64,
    pub pickup_distance: f64,
    pub breakdown: RewardBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DispatchOutcome {
    Serviced(ServicedTrip),
    /// Nothing pending; no driver was looked at.
    NoPendingPassengers,
    /// The selected driver was busy; nothing changed.
    DriverBusy { driver_index: usize },
    /// Only reachable with a hand-built empty fleet.
    EmptyFleet,
    /// `step` was called after the day ended.
    EpisodeOver,
    /// The step ran without the dispatch system publishing an outcome.
    NotResolved,
}

impl DispatchOutcome {
    pub fn is_serviced(&self) -> bool {
        matches!(self, DispatchOutcome::Serviced(_))
    }

    pub fn serviced(&self) -> Option<&ServicedTrip> {
        match self {
            DispatchOutcome::Serviced(trip) => Some(trip),
            _ => None,
        }
    }

    /// Weighted reward; zero for every no-op.
    pub fn reward(&self) -> WeightedReward {
        self.serviced()
            .map(|trip| trip.breakdown.weighted)
            .unwrap_or_default()
    }

    /// Unweighted components; zero for every no-op.
    pub fn components(&self) -> RewardComponents {
        self.serviced()
            .map(|trip| trip.breakdown.components)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            DispatchOutcome::Serviced(_) => "serviced",
            DispatchOutcome::NoPendingPassengers => "no_pending_passengers",
            DispatchOutcome::DriverBusy { .. } => "driver_busy",
            DispatchOutcome::EmptyFleet => "empty_fleet",
            DispatchOutcome::EpisodeOver => "episode_over",
            DispatchOutcome::NotResolved => "not_resolved",
        }
    }

    /// Component map for diagnostics, with `dispatched` set to 1.0 or 0.0 so a
    /// zero-reward dispatch is distinguishable from a no-op.
    pub fn diagnostics(&self) -> BTreeMap<&'static str, f64> {
        let mut map = self.components().to_map();
        map.insert("dispatched", if self.is_serviced() { 1.0 } else { 0.0 });
        map
    }
}

/// Resolve this step's dispatch and commit it.
///
/// On success the driver moves to the pickup point (trips complete within the
/// step), its `hours_driven_today` grows by `hours_per_trip`, and the head
/// passenger leaves the queue.
pub fn resolve(
    fleet: &mut [Driver],
    queue: &mut VecDeque<Passenger>,
    selected_driver: usize,
    incentives: &IncentiveVector,
    reward_config: &RewardConfig,
    hours_per_trip: f64,
) -> DispatchOutcome {
    let Some(passenger) = queue.front() else {
        return DispatchOutcome::NoPendingPassengers;
    };
    if fleet.is_empty() {
        return DispatchOutcome::EmptyFleet;
    }
    let driver_index = selected_driver % fleet.len();
    let driver = &fleet[driver_index];
    if !driver.is_idle() {
        return DispatchOutcome::DriverBusy { driver_index };
    }

    let trip_distance = driver.position.distance_to(&passenger.pickup);
    let target_zone = incentives.target_for(passenger.destination_zone);
    let breakdown = score(driver, passenger, trip_distance, target_zone, reward_config);
    let trip = ServicedTrip {
        driver_index,
        driver_id: driver.id,
        passenger_id: passenger.id,
        passenger_wait: passenger.wait_time,
        destination_zone: passenger.destination_zone,
        target_zone,
        trip_distance,
        pickup_distance: trip_distance,
        breakdown,
    };

    if let Some(passenger) = queue.pop_front() {
        let driver = &mut fleet[driver_index];
        driver.position = passenger.pickup;
        driver.hours_driven_today += hours_per_trip;
    }
    log::debug!(
        "driver {} serviced passenger {} (wait {}, reward {:.3})",
        trip.driver_id,
        trip.passenger_id,
        trip.passenger_wait,
        trip.breakdown.weighted.total()
    );
    DispatchOutcome::Serviced(trip)
}
