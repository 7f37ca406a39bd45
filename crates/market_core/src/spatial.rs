//! Zone grid: a fixed `grid_size × grid_size` partition of the city plane.
//!
//! Zones are unit squares covering `[0, grid_size)` on both axes, indexed row
//! major: `zone = row * grid_size + col`. Positions outside the extent are
//! clamped onto the border zones, so every position maps to a valid zone.

use bevy_ecs::prelude::Resource;
use rand::Rng;

use crate::agents::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub struct ZoneGrid {
    grid_size: usize,
}

impl ZoneGrid {
    /// `grid_size` must be positive; `MarketConfig::validate` guarantees it for
    /// grids built by an episode.
    pub fn new(grid_size: usize) -> Self {
        debug_assert!(grid_size > 0, "grid size must be positive");
        Self { grid_size }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn num_zones(&self) -> usize {
        self.grid_size * self.grid_size
    }

    pub fn contains_zone(&self, zone: usize) -> bool {
        zone < self.num_zones()
    }

    /// Zone containing `position`.
    pub fn zone_of(&self, position: &Position) -> usize {
        let col = self.axis_cell(position.x);
        let row = self.axis_cell(position.y);
        row * self.grid_size + col
    }

    fn axis_cell(&self, coord: f64) -> usize {
        let max = self.grid_size.saturating_sub(1);
        if coord.is_nan() || coord <= 0.0 {
            return 0;
        }
        // `as` saturates on overflow, then clamp onto the last cell.
        (coord.floor() as usize).min(max)
    }

    /// Uniform position inside the grid extent.
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let extent = self.grid_size as f64;
        Position::new(rng.gen::<f64>() * extent, rng.gen::<f64>() * extent)
    }

    /// Uniform zone index in `[0, num_zones)`.
    pub fn random_zone<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.num_zones())
    }

    /// Per-zone counts of an iterator of zone indices. Out-of-range indices are
    /// ignored.
    pub fn count_by_zone<I>(&self, zones: I) -> Vec<u32>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut counts = vec![0u32; self.num_zones()];
        for zone in zones {
            if let Some(slot) = counts.get_mut(zone) {
                *slot += 1;
            }
        }
        counts
    }
}
