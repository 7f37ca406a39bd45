use bevy_ecs::prelude::ResMut;

use crate::agents::PendingPassengers;

/// Every passenger still pending at the start of a step has waited one more step.
pub fn queue_ageing_system(mut pending: ResMut<PendingPassengers>) {
    for passenger in pending.0.iter_mut() {
        passenger.increment_wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::{Schedule, World};

    use crate::agents::{Passenger, Position};

    #[test]
    fn ages_every_pending_passenger() {
        let mut world = World::new();
        let mut pending = PendingPassengers::default();
        pending.0.push_back(Passenger::new(0, Position::default(), 0));
        pending.0.push_back(Passenger::new(1, Position::default(), 0).with_wait_time(4));
        world.insert_resource(pending);

        let mut schedule = Schedule::default();
        schedule.add_systems(queue_ageing_system);
        schedule.run(&mut world);

        let waits: Vec<u32> = world
            .resource::<PendingPassengers>()
            .iter()
            .map(|p| p.wait_time)
            .collect();
        assert_eq!(waits, vec![1, 5]);
    }
}
