use bevy_ecs::prelude::ResMut;

use crate::clock::EpisodeClock;

/// First system of every step: move the clock forward by one tick.
pub fn advance_clock_system(mut clock: ResMut<EpisodeClock>) {
    clock.advance();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::{Schedule, World};

    use crate::clock::STEP_MINUTES;

    #[test]
    fn advances_by_one_step() {
        let mut world = World::new();
        world.insert_resource(EpisodeClock::default());

        let mut schedule = Schedule::default();
        schedule.add_systems(advance_clock_system);
        schedule.run(&mut world);
        schedule.run(&mut world);

        assert_eq!(world.resource::<EpisodeClock>().minutes(), 2 * STEP_MINUTES);
    }
}
