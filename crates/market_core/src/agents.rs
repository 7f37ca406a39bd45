//! Entity model: drivers and passengers, plus the episode-owned collections
//! that hold them.
//!
//! Identity fields never change after creation; everything else is mutated
//! only by the dispatch resolver (drivers) or the demand generator and queue
//! ageing (passengers).

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::fatigue::fatigue_score;

/// Point in the city plane. The grid covers `[0, grid_size)` on both axes but
/// positions themselves are not bounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverStatus {
    #[default]
    Idle,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: u32,
    pub position: Position,
    pub status: DriverStatus,
    /// Monotonically non-decreasing within an episode.
    pub hours_driven_today: f64,
    pub consecutive_driving_hours: f64,
    pub acceptance_rate: f64,
}

impl Driver {
    /// Fresh driver at the start of a day: idle, rested, always accepting.
    pub fn new(id: u32, position: Position) -> Self {
        Self {
            id,
            position,
            status: DriverStatus::Idle,
            hours_driven_today: 0.0,
            consecutive_driving_hours: 0.0,
            acceptance_rate: 1.0,
        }
    }

    pub fn with_hours_driven(mut self, hours: f64) -> Self {
        self.hours_driven_today = hours;
        self
    }

    pub fn with_consecutive_hours(mut self, hours: f64) -> Self {
        self.consecutive_driving_hours = hours;
        self
    }

    pub fn with_status(mut self, status: DriverStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_idle(&self) -> bool {
        self.status == DriverStatus::Idle
    }

    /// Derived on every call; never cached on the driver.
    pub fn fatigue_score(&self) -> f64 {
        fatigue_score(self.hours_driven_today, self.consecutive_driving_hours)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    /// Unique within an episode; assigned from a monotonic counter.
    pub id: u64,
    pub pickup: Position,
    pub destination_zone: usize,
    /// Steps spent in the pending queue.
    pub wait_time: u32,
}

impl Passenger {
    pub fn new(id: u64, pickup: Position, destination_zone: usize) -> Self {
        Self {
            id,
            pickup,
            destination_zone,
            wait_time: 0,
        }
    }

    pub fn with_wait_time(mut self, steps: u32) -> Self {
        self.wait_time = steps;
        self
    }

    pub fn increment_wait(&mut self) {
        self.wait_time = self.wait_time.saturating_add(1);
    }
}

/// The episode's driver fleet, indexed by position in the vector.
#[derive(Debug, Clone, Default, Resource)]
pub struct Fleet(pub Vec<Driver>);

impl Fleet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.0
    }
}

/// Passengers waiting for a driver, oldest first.
#[derive(Debug, Clone, Default, Resource)]
pub struct PendingPassengers(pub VecDeque<Passenger>);

impl PendingPassengers {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn new_driver_starts_idle_and_rested() {
        let driver = Driver::new(7, Position::new(1.0, 2.0));
        assert_eq!(driver.id, 7);
        assert!(driver.is_idle());
        assert_eq!(driver.hours_driven_today, 0.0);
        assert_eq!(driver.consecutive_driving_hours, 0.0);
        assert_eq!(driver.acceptance_rate, 1.0);
        assert_eq!(driver.fatigue_score(), 0.0);
    }

    #[test]
    fn fatigue_tracks_hours_without_being_stored() {
        let mut driver = Driver::new(0, Position::default()).with_hours_driven(6.0);
        assert_eq!(driver.fatigue_score(), 0.5);
        driver.hours_driven_today += 3.0;
        assert_eq!(driver.fatigue_score(), 0.75);
    }

    #[test]
    fn passenger_wait_increments_by_one_step() {
        let mut passenger = Passenger::new(3, Position::new(0.5, 0.5), 1);
        assert_eq!(passenger.wait_time, 0);
        passenger.increment_wait();
        passenger.increment_wait();
        assert_eq!(passenger.wait_time, 2);
    }
}
