//! Passenger demand: Poisson arrivals per step with a time-of-day rate.
//!
//! The rate is `peak_rate` inside any peak window (exclusive bounds, hours of
//! day) and `off_peak_rate` otherwise. Each arrival gets a uniform pickup
//! position inside the grid, a uniform destination zone, and an id from a
//! monotonic counter that never reuses ids within an episode.

use bevy_ecs::prelude::Resource;
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use serde::{Deserialize, Serialize};

use crate::agents::Passenger;
use crate::error::ConfigError;
use crate::spatial::ZoneGrid;

/// Window of elevated demand, in hours of day. Both bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakWindow {
    pub start_hour: f64,
    pub end_hour: f64,
}

impl PeakWindow {
    pub fn new(start_hour: f64, end_hour: f64) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    pub fn contains(&self, hour: f64) -> bool {
        self.start_hour < hour && hour < self.end_hour
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandProfile {
    /// Expected arrivals per step inside a peak window.
    pub peak_rate: f64,
    /// Expected arrivals per step outside every peak window.
    pub off_peak_rate: f64,
    pub peak_windows: Vec<PeakWindow>,
}

impl Default for DemandProfile {
    fn default() -> Self {
        Self {
            peak_rate: 2.0,
            off_peak_rate: 0.5,
            peak_windows: vec![PeakWindow::new(7.0, 10.0), PeakWindow::new(17.0, 20.0)],
        }
    }
}

impl DemandProfile {
    pub fn is_peak(&self, hour_of_day: f64) -> bool {
        self.peak_windows.iter().any(|w| w.contains(hour_of_day))
    }

    pub fn rate_at(&self, hour_of_day: f64) -> f64 {
        if self.is_peak(hour_of_day) {
            self.peak_rate
        } else {
            self.off_peak_rate
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("peak_rate", self.peak_rate), ("off_peak_rate", self.off_peak_rate)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidArrivalRate { name, value });
            }
        }
        for window in &self.peak_windows {
            let ordered = window.start_hour < window.end_hour;
            let in_day = window.start_hour >= 0.0 && window.end_hour <= 24.0;
            if !(ordered && in_day) {
                return Err(ConfigError::InvalidPeakWindow {
                    start: window.start_hour,
                    end: window.end_hour,
                });
            }
        }
        Ok(())
    }
}

/// Stateful arrival process for one episode. Owns the passenger id counter.
#[derive(Debug, Clone, Resource)]
pub struct DemandGenerator {
    profile: DemandProfile,
    next_passenger_id: u64,
}

impl DemandGenerator {
    pub fn new(profile: DemandProfile) -> Self {
        Self {
            profile,
            next_passenger_id: 0,
        }
    }

    pub fn profile(&self) -> &DemandProfile {
        &self.profile
    }

    /// Number of passengers created so far.
    pub fn issued(&self) -> u64 {
        self.next_passenger_id
    }

    /// Sample this step's arrivals. Total: a rate that Poisson rejects yields
    /// zero arrivals rather than an error.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        hour_of_day: f64,
        grid: &ZoneGrid,
        rng: &mut R,
    ) -> Vec<Passenger> {
        let rate = self.profile.rate_at(hour_of_day);
        let arrivals = match Poisson::new(rate) {
            Ok(poisson) => {
                let sample: f64 = poisson.sample(rng);
                sample as usize
            }
            Err(_) => 0,
        };

        (0..arrivals)
            .map(|_| {
                let pickup = grid.random_position(rng);
                let destination_zone = grid.random_zone(rng);
                let id = self.next_passenger_id;
                self.next_passenger_id += 1;
                Passenger::new(id, pickup, destination_zone)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn peak_windows_use_exclusive_bounds() {
        let profile = DemandProfile::default();
        assert_eq!(profile.rate_at(7.0), 0.5);
        assert_eq!(profile.rate_at(7.0833), 2.0);
        assert_eq!(profile.rate_at(8.0), 2.0);
        assert_eq!(profile.rate_at(10.0), 0.5);
        assert_eq!(profile.rate_at(18.5), 2.0);
        assert_eq!(profile.rate_at(20.0), 0.5);
        assert_eq!(profile.rate_at(2.0), 0.5);
    }

    #[test]
    fn ids_are_monotonic_across_calls() {
        let grid = ZoneGrid::new(4);
        let mut generator = DemandGenerator::new(DemandProfile::default());
        let mut rng = StdRng::seed_from_u64(5);
        let mut ids = Vec::new();
        for _ in 0..200 {
            ids.extend(generator.generate(8.0, &grid, &mut rng).into_iter().map(|p| p.id));
        }
        assert!(!ids.is_empty());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(generator.issued(), ids.len() as u64);
    }

    #[test]
    fn passengers_are_valid_at_creation() {
        let grid = ZoneGrid::new(3);
        let mut generator = DemandGenerator::new(DemandProfile::default());
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..300 {
            for p in generator.generate(18.0, &grid, &mut rng) {
                assert!(grid.contains_zone(p.destination_zone));
                assert!((0.0..3.0).contains(&p.pickup.x));
                assert!((0.0..3.0).contains(&p.pickup.y));
                assert_eq!(p.wait_time, 0);
            }
        }
    }

    #[test]
    fn validate_rejects_bad_rates_and_windows() {
        let zero_rate = DemandProfile {
            off_peak_rate: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            zero_rate.validate(),
            Err(ConfigError::InvalidArrivalRate { name: "off_peak_rate", .. })
        ));

        let reversed = DemandProfile {
            peak_windows: vec![PeakWindow::new(10.0, 7.0)],
            ..Default::default()
        };
        assert!(matches!(reversed.validate(), Err(ConfigError::InvalidPeakWindow { .. })));

        let no_peaks = DemandProfile {
            peak_windows: Vec::new(),
            ..Default::default()
        };
        assert!(no_peaks.validate().is_ok());
        assert_eq!(no_peaks.rate_at(8.0), 0.5);
    }
}
