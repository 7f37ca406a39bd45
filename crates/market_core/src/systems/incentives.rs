use bevy_ecs::prelude::{Res, ResMut};

use crate::episode::StepAction;
use crate::incentives::IncentiveVector;

/// Overwrite the incentive vector with this step's zone-level action.
pub fn apply_incentives_system(action: Res<StepAction>, mut incentives: ResMut<IncentiveVector>) {
    incentives.overwrite(&action.incentives);
}
