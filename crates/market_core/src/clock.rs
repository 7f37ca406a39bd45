//! Logical episode clock: a step counter over one simulated day.
//!
//! Each step is [`STEP_MINUTES`] simulated minutes; the day ends at
//! [`DAY_MINUTES`]. There is no wall-clock component.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

pub const STEP_MINUTES: u32 = 5;
pub const DAY_MINUTES: u32 = 24 * 60;
pub const STEPS_PER_DAY: u32 = DAY_MINUTES / STEP_MINUTES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeStatus {
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Resource)]
pub struct EpisodeClock {
    minutes: u32,
}

impl EpisodeClock {
    /// Minutes elapsed since the start of the episode.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Steps taken so far, `0..=STEPS_PER_DAY`.
    pub fn step_index(&self) -> u32 {
        self.minutes / STEP_MINUTES
    }

    pub fn status(&self) -> EpisodeStatus {
        if self.minutes >= DAY_MINUTES {
            EpisodeStatus::Terminated
        } else {
            EpisodeStatus::Running
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.status() == EpisodeStatus::Terminated
    }

    /// Elapsed time in hours; reads 24.0 once the day is over.
    pub fn time_of_day_hours(&self) -> f64 {
        self.minutes as f64 / 60.0
    }

    /// Hour of day in `[0, 24)`, used for demand rates.
    pub fn hour_of_day(&self) -> f64 {
        (self.minutes % DAY_MINUTES) as f64 / 60.0
    }

    /// Advance one step. A terminated clock does not move.
    pub fn advance(&mut self) -> EpisodeStatus {
        if !self.is_terminated() {
            self.minutes += STEP_MINUTES;
        }
        self.status()
    }
}
