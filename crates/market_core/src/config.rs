//! Market configuration consumed by an episode.
//!
//! Supplied once at construction; the episode validates it and fails fast on
//! anything that would make a step ill-defined.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::demand::DemandProfile;
use crate::error::ConfigError;
use crate::reward::RewardConfig;

/// Largest accepted `grid_size`; keeps `grid_size²` zone vectors allocatable.
pub const MAX_GRID_SIZE: usize = 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct MarketConfig {
    /// Zones per side; the city has `grid_size²` zones.
    pub grid_size: usize,
    pub num_drivers: usize,
    /// Hours added to a driver's day for each serviced trip.
    pub hours_per_trip: f64,
    pub reward: RewardConfig,
    pub demand: DemandProfile,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            num_drivers: 50,
            hours_per_trip: 0.5,
            reward: RewardConfig::default(),
            demand: DemandProfile::default(),
        }
    }
}

impl MarketConfig {
    pub fn num_zones(&self) -> usize {
        self.grid_size * self.grid_size
    }

    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_num_drivers(mut self, num_drivers: usize) -> Self {
        self.num_drivers = num_drivers;
        self
    }

    pub fn with_hours_per_trip(mut self, hours: f64) -> Self {
        self.hours_per_trip = hours;
        self
    }

    pub fn with_reward_config(mut self, reward: RewardConfig) -> Self {
        self.reward = reward;
        self
    }

    pub fn with_demand_profile(mut self, demand: DemandProfile) -> Self {
        self.demand = demand;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let zones = self.grid_size.checked_mul(self.grid_size);
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE || zones.is_none() {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        if self.num_drivers == 0 {
            return Err(ConfigError::InvalidFleetSize(self.num_drivers));
        }
        if !self.hours_per_trip.is_finite() || self.hours_per_trip < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "hours_per_trip",
                value: self.hours_per_trip,
            });
        }
        self.reward.validate()?;
        self.demand.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = MarketConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_zones(), 16);
    }

    #[test]
    fn rejects_empty_grid_and_fleet() {
        assert_eq!(
            MarketConfig::default().with_grid_size(0).validate(),
            Err(ConfigError::InvalidGridSize(0))
        );
        assert_eq!(
            MarketConfig::default().with_num_drivers(0).validate(),
            Err(ConfigError::InvalidFleetSize(0))
        );
    }

    #[test]
    fn rejects_grids_too_large_to_build() {
        let overflowing = MarketConfig::default()
            .with_grid_size(1usize << 32)
            .with_num_drivers(2);
        assert_eq!(
            overflowing.validate(),
            Err(ConfigError::InvalidGridSize(1usize << 32))
        );
        assert_eq!(
            MarketConfig::default().with_grid_size(MAX_GRID_SIZE + 1).validate(),
            Err(ConfigError::InvalidGridSize(MAX_GRID_SIZE + 1))
        );
        assert!(MarketConfig::default().with_grid_size(MAX_GRID_SIZE).validate().is_ok());
    }

    #[test]
    fn rejects_negative_trip_hours() {
        let err = MarketConfig::default()
            .with_hours_per_trip(-0.5)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "hours_per_trip", .. }));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: MarketConfig =
            serde_json::from_str(r#"{ "grid_size": 3, "reward": { "compliance_bonus": 8.0 } }"#)
                .expect("config json");
        assert_eq!(config.grid_size, 3);
        assert_eq!(config.num_drivers, 50);
        assert_eq!(config.reward.compliance_bonus, 8.0);
        assert_eq!(config.reward.base_fare, 2.0);
        assert_eq!(config.demand, DemandProfile::default());
    }
}
