//! Step runner: inserts the caller's action into the world and runs the
//! per-step schedule.
//!
//! Systems are chained so a step is one ordered transaction: advance the clock,
//! overwrite incentives, age the queue, generate demand, resolve dispatch,
//! capture the snapshot.

use bevy_ecs::prelude::{Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::clock::EpisodeClock;
use crate::episode::StepAction;
use crate::systems::{
    advance_clock::advance_clock_system, demand::demand_system, dispatch::dispatch_system,
    incentives::apply_incentives_system, queue_ageing::queue_ageing_system,
    snapshot::capture_observation_system,
};

/// Builds the per-step schedule.
pub fn step_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            advance_clock_system,
            apply_incentives_system,
            queue_ageing_system,
            demand_system,
            dispatch_system,
            capture_observation_system,
        )
            .chain(),
    );
    schedule
}

/// Runs one step with `action`. Returns `false` without touching the world when
/// the episode has already terminated.
pub fn run_step(world: &mut World, schedule: &mut Schedule, action: StepAction) -> bool {
    let terminated = world
        .get_resource::<EpisodeClock>()
        .map(|clock| clock.is_terminated())
        .unwrap_or(true);
    if terminated {
        return false;
    }

    world.insert_resource(action);
    schedule.run(world);
    true
}

/// Runs steps produced by `next_action` until the day ends or `max_steps` is
/// reached. Returns the number of steps executed.
pub fn run_until_terminated<F>(
    world: &mut World,
    schedule: &mut Schedule,
    max_steps: usize,
    mut next_action: F,
) -> usize
where
    F: FnMut(&World) -> StepAction,
{
    let mut steps = 0;
    while steps < max_steps {
        let action = next_action(world);
        if !run_step(world, schedule, action) {
            break;
        }
        steps += 1;
    }
    steps
}
