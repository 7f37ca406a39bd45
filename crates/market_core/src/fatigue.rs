//! Driver fatigue score.
//!
//! Fatigue is a pure function of accumulated and continuous driving load. It is
//! never stored; the snapshot and the reward engine recompute it on demand.

/// Hours of driving in a day that count as full fatigue.
pub const FULL_FATIGUE_HOURS: f64 = 12.0;

/// Continuous driving beyond this many hours adds [`CONSECUTIVE_PENALTY`].
pub const CONSECUTIVE_HOURS_LIMIT: f64 = 4.0;

pub const CONSECUTIVE_PENALTY: f64 = 0.2;

/// Fatigue in `[0, 1]`.
///
/// Formula: `hours_driven_today / 12`, plus `0.2` when
/// `consecutive_driving_hours > 4`, clamped to `[0, 1]`. Inputs are not
/// validated; keeping them non-negative is the caller's job.
pub fn fatigue_score(hours_driven_today: f64, consecutive_driving_hours: f64) -> f64 {
    let mut fatigue = hours_driven_today / FULL_FATIGUE_HOURS;
    if consecutive_driving_hours > CONSECUTIVE_HOURS_LIMIT {
        fatigue += CONSECUTIVE_PENALTY;
    }
    fatigue.clamp(0.0, 1.0)
}
