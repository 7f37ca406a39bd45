//! Per-zone incentive signal set by the zone-level policy each step.

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Default, PartialEq, Resource)]
pub struct IncentiveVector(Vec<f64>);

impl IncentiveVector {
    pub fn zeros(num_zones: usize) -> Self {
        Self(vec![0.0; num_zones])
    }

    /// Negative and non-finite entries are stored as zero.
    pub fn from_values(values: &[f64]) -> Self {
        let mut vector = Self::default();
        vector.overwrite(values);
        vector
    }

    /// Replace every entry; nothing carries over from the previous step.
    pub fn overwrite(&mut self, values: &[f64]) {
        self.0.clear();
        self.0.extend(
            values
                .iter()
                .map(|&v| if v.is_finite() && v > 0.0 { v } else { 0.0 }),
        );
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_zone(&self, zone: usize) -> bool {
        zone < self.0.len()
    }

    /// Zone with the largest strictly positive incentive, lowest index on ties.
    /// `None` when no zone carries an incentive.
    pub fn favored_zone(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (zone, &value) in self.0.iter().enumerate() {
            if value <= 0.0 {
                continue;
            }
            match best {
                Some((_, top)) if value <= top => {}
                _ => best = Some((zone, value)),
            }
        }
        best.map(|(zone, _)| zone)
    }

    /// Target zone for compliance scoring of a trip heading to
    /// `destination_zone`. A destination outside the vector disables the bonus.
    pub fn target_for(&self, destination_zone: usize) -> Option<usize> {
        if self.contains_zone(destination_zone) {
            self.favored_zone()
        } else {
            None
        }
    }
}
