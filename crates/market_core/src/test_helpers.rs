//! Test helpers for common test setup and utilities.
//!
//! Shared by unit tests, integration tests and benchmarks so scripted
//! scenarios stay identical across them.

use crate::agents::{Driver, Passenger, Position};
use crate::config::MarketConfig;
use crate::episode::StepAction;

/// Driver at the origin with 10 hours driven and 5 consecutive: fatigue 1.0.
pub fn reference_driver() -> Driver {
    Driver::new(0, Position::new(0.0, 0.0))
        .with_hours_driven(10.0)
        .with_consecutive_hours(5.0)
}

/// Passenger at (3, 4) heading to zone 2 after waiting 5 steps.
pub fn reference_passenger() -> Passenger {
    Passenger::new(500, Position::new(3.0, 4.0), 2).with_wait_time(5)
}

/// A 3×3 city with 6 drivers; small enough to reason about in tests.
pub fn small_config() -> MarketConfig {
    MarketConfig::default().with_grid_size(3).with_num_drivers(6)
}

/// Deterministic action script: the favored zone and the selected driver
/// rotate with the step index.
pub fn scripted_actions(steps: usize, num_zones: usize, num_drivers: usize) -> Vec<StepAction> {
    (0..steps)
        .map(|step| {
            let mut incentives = vec![0.0; num_zones];
            if num_zones > 0 {
                incentives[step % num_zones] = 1.0 + (step % 3) as f64;
            }
            StepAction::new(incentives, (step * 7) % num_drivers.max(1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_driver_is_fully_fatigued() {
        assert_eq!(reference_driver().fatigue_score(), 1.0);
    }

    #[test]
    fn scripted_actions_are_well_formed() {
        let actions = scripted_actions(20, 9, 6);
        assert_eq!(actions.len(), 20);
        assert!(actions.iter().all(|a| a.incentives.len() == 9));
        assert!(actions.iter().all(|a| a.selected_driver < 6));
        assert_eq!(actions[4].incentives[4], 2.0);
    }
}
