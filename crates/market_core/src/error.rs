//! Configuration errors. The only failures the core reports; everything that can
//! happen during a step is a value, not an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be in 1..={max}, got {0}", max = crate::config::MAX_GRID_SIZE)]
    InvalidGridSize(usize),

    #[error("fleet size must be positive, got {0}")]
    InvalidFleetSize(usize),

    #[error("arrival rate `{name}` must be positive and finite, got {value}")]
    InvalidArrivalRate { name: &'static str, value: f64 },

    #[error("parameter `{name}` must be non-negative and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("peak window ({start}, {end}) must satisfy 0 <= start < end <= 24")]
    InvalidPeakWindow { start: f64, end: f64 },
}
