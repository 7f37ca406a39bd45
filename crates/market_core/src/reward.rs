//! Composite reward for one dispatch event.
//!
//! Four independently weighted objectives, always in this order:
//!
//! 1. **profit**: `base_fare + d * per_km_rate - d * driver_cost_per_km`
//! 2. **wait**: `-wait_penalty_factor * wait_time²`
//! 3. **driver utility**: `-pickup_distance * (1 + fatigue)`
//! 4. **compliance**: `compliance_bonus` when the destination zone is the target zone
//!
//! [`score`] is pure; it never touches the driver or the passenger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::agents::{Driver, Passenger};
use crate::error::ConfigError;

/// Per-objective weights applied to the raw components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveWeights {
    pub profit: f64,
    pub wait: f64,
    pub driver_utility: f64,
    pub compliance: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            profit: 1.0,
            wait: 1.0,
            driver_utility: 1.0,
            compliance: 1.0,
        }
    }
}

/// Fare, cost and penalty constants consumed by [`score`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub driver_cost_per_km: f64,
    pub wait_penalty_factor: f64,
    pub compliance_bonus: f64,
    pub weights: ObjectiveWeights,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            base_fare: 2.0,
            per_km_rate: 1.5,
            driver_cost_per_km: 0.5,
            wait_penalty_factor: 0.1,
            compliance_bonus: 5.0,
            weights: ObjectiveWeights::default(),
        }
    }
}

impl RewardConfig {
    pub fn with_weights(mut self, weights: ObjectiveWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("base_fare", self.base_fare),
            ("per_km_rate", self.per_km_rate),
            ("driver_cost_per_km", self.driver_cost_per_km),
            ("wait_penalty_factor", self.wait_penalty_factor),
            ("compliance_bonus", self.compliance_bonus),
            ("weights.profit", self.weights.profit),
            ("weights.wait", self.weights.wait),
            ("weights.driver_utility", self.weights.driver_utility),
            ("weights.compliance", self.weights.compliance),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Unweighted objective values, kept for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardComponents {
    pub profit: f64,
    pub wait: f64,
    pub driver_util: f64,
    pub compliance: f64,
}

impl RewardComponents {
    pub fn weighted(&self, weights: &ObjectiveWeights) -> WeightedReward {
        WeightedReward {
            profit: weights.profit * self.profit,
            wait: weights.wait * self.wait,
            driver_util: weights.driver_utility * self.driver_util,
            compliance: weights.compliance * self.compliance,
        }
    }

    /// Components keyed by name: `profit`, `wait`, `driver_util`, `compliance`.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("profit", self.profit),
            ("wait", self.wait),
            ("driver_util", self.driver_util),
            ("compliance", self.compliance),
        ])
    }
}

/// Weighted objective values; the reward handed back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedReward {
    pub profit: f64,
    pub wait: f64,
    pub driver_util: f64,
    pub compliance: f64,
}

impl WeightedReward {
    /// `(profit, wait, driver_util, compliance)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.profit, self.wait, self.driver_util, self.compliance)
    }

    pub fn total(&self) -> f64 {
        self.profit + self.wait + self.driver_util + self.compliance
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    pub weighted: WeightedReward,
    pub components: RewardComponents,
}

pub fn profit_term(trip_distance: f64, config: &RewardConfig) -> f64 {
    let fare = config.base_fare + trip_distance * config.per_km_rate;
    let cost = trip_distance * config.driver_cost_per_km;
    fare - cost
}

pub fn wait_term(wait_time: u32, config: &RewardConfig) -> f64 {
    let wait = wait_time as f64;
    -(config.wait_penalty_factor * wait * wait)
}

pub fn driver_utility_term(pickup_distance: f64, fatigue: f64) -> f64 {
    -(pickup_distance * (1.0 + fatigue))
}

/// No partial credit: either the full bonus or zero.
pub fn compliance_term(destination_zone: usize, target_zone: Option<usize>, config: &RewardConfig) -> f64 {
    match target_zone {
        Some(target) if target == destination_zone => config.compliance_bonus,
        _ => 0.0,
    }
}

/// Score one (driver, passenger) pairing.
///
/// `target_zone` is the zone favored by the incentive policy; `None` disables
/// the compliance bonus. `trip_distance` must be a finite, non-negative value.
pub fn score(
    driver: &Driver,
    passenger: &Passenger,
    trip_distance: f64,
    target_zone: Option<usize>,
    config: &RewardConfig,
) -> RewardBreakdown {
    let pickup_distance = driver.position.distance_to(&passenger.pickup);
    let components = RewardComponents {
        profit: profit_term(trip_distance, config),
        wait: wait_term(passenger.wait_time, config),
        driver_util: driver_utility_term(pickup_distance, driver.fatigue_score()),
        compliance: compliance_term(passenger.destination_zone, target_zone, config),
    };
    if components.compliance != 0.0 {
        log::debug!(
            "strategic match: driver {} heads to target zone {}",
            driver.id,
            passenger.destination_zone
        );
    }

    RewardBreakdown {
        weighted: components.weighted(&config.weights),
        components,
    }
}
