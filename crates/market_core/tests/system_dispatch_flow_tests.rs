mod support;

use market_core::agents::{DriverStatus, Fleet, Position};
use market_core::dispatch::DispatchOutcome;
use support::episode::{enqueue, quiet_config, seeded_episode};

const EPS: f64 = 1e-9;

fn park_fleet_at_origin(episode: &mut market_core::Episode) {
    let mut fleet = episode.world_mut().resource_mut::<Fleet>();
    for driver in fleet.0.iter_mut() {
        driver.position = Position::new(0.0, 0.0);
    }
}

#[test]
fn empty_queue_is_a_zero_reward_no_op() {
    let mut episode = seeded_episode(quiet_config(), 1);
    let fleet_before = episode.fleet().clone();

    let result = episode.step(&[3.0; 9], 2);
    assert_eq!(result.outcome, DispatchOutcome::NoPendingPassengers);
    assert_eq!(result.total_reward(), 0.0);
    assert_eq!(result.diagnostics()["dispatched"], 0.0);
    assert_eq!(episode.fleet().drivers(), fleet_before.drivers());
    assert_eq!(episode.telemetry().empty_queue_noops, 1);
}

#[test]
fn busy_driver_leaves_fleet_and_queue_untouched() {
    let mut episode = seeded_episode(quiet_config(), 2);
    enqueue(&mut episode, 9_000, Position::new(1.0, 1.0), 4);
    episode.world_mut().resource_mut::<Fleet>().0[1].status = DriverStatus::Busy;
    let fleet_before = episode.fleet().clone();

    let result = episode.step(&[0.0; 9], 1);
    assert_eq!(result.outcome, DispatchOutcome::DriverBusy { driver_index: 1 });
    assert_eq!(result.total_reward(), 0.0);
    assert_eq!(episode.fleet().drivers(), fleet_before.drivers());

    let head = episode.pending().iter().next().expect("passenger still queued");
    assert_eq!(head.id, 9_000);
    assert_eq!(head.wait_time, 1);
    assert_eq!(episode.telemetry().busy_driver_noops, 1);
}

#[test]
fn selection_index_wraps_around_the_fleet() {
    let mut episode = seeded_episode(quiet_config(), 3);
    enqueue(&mut episode, 1, Position::new(2.5, 0.5), 0);

    // Four drivers: index 9 resolves to driver 1.
    let result = episode.step(&[], 9);
    let trip = result.outcome.serviced().expect("serviced");
    assert_eq!(trip.driver_index, 1);
    assert_eq!(trip.driver_id, 1);

    let driver = &episode.fleet().drivers()[1];
    assert_eq!(driver.position, Position::new(2.5, 0.5));
    assert!((driver.hours_driven_today - 0.5).abs() < EPS);
    assert!(episode.pending().is_empty());
}

#[test]
fn dispatch_scores_all_four_objectives() {
    let mut episode = seeded_episode(quiet_config(), 4);
    park_fleet_at_origin(&mut episode);
    enqueue(&mut episode, 7, Position::new(0.0, 2.0), 5);

    let mut incentives = [0.0; 9];
    incentives[5] = 4.0;
    let result = episode.step(&incentives, 0);
    let trip = result.outcome.serviced().expect("serviced");
    let c = trip.breakdown.components;

    assert_eq!(trip.target_zone, Some(5));
    assert_eq!(trip.passenger_wait, 1);
    assert!((trip.trip_distance - 2.0).abs() < EPS);
    assert!((c.profit - 4.0).abs() < EPS);
    assert!((c.wait + 0.1).abs() < EPS);
    assert!((c.driver_util + 2.0).abs() < EPS);
    assert!((c.compliance - 5.0).abs() < EPS);
    assert!((result.total_reward() - 6.9).abs() < EPS);
    assert_eq!(result.diagnostics()["dispatched"], 1.0);
}

#[test]
fn non_target_destination_earns_no_bonus() {
    let mut episode = seeded_episode(quiet_config(), 5);
    park_fleet_at_origin(&mut episode);
    enqueue(&mut episode, 7, Position::new(0.0, 2.0), 3);

    let mut incentives = [0.0; 9];
    incentives[5] = 4.0;
    let result = episode.step(&incentives, 0);
    assert_eq!(result.outcome.components().compliance, 0.0);
    assert!((result.total_reward() - 1.9).abs() < EPS);
}

#[test]
fn out_of_range_destination_is_serviced_without_bonus() {
    let mut episode = seeded_episode(quiet_config(), 6);
    enqueue(&mut episode, 11, Position::new(1.0, 1.0), 99);

    let result = episode.step(&[10.0; 9], 0);
    let trip = result.outcome.serviced().expect("serviced");
    assert_eq!(trip.destination_zone, 99);
    assert_eq!(trip.target_zone, None);
    assert_eq!(trip.breakdown.components.compliance, 0.0);
    // Density counts ignore destinations outside the grid.
    assert_eq!(result.observation.total_demand(), 0);
}

#[test]
fn queue_is_served_in_arrival_order() {
    let mut episode = seeded_episode(quiet_config(), 7);
    for id in [30, 31, 32] {
        enqueue(&mut episode, id, Position::new(1.5, 1.5), 0);
    }
    let served: Vec<u64> = (0..3)
        .filter_map(|step| {
            episode
                .step(&[], step)
                .outcome
                .serviced()
                .map(|trip| trip.passenger_id)
        })
        .collect();
    assert_eq!(served, vec![30, 31, 32]);
}

#[test]
fn fatigue_grows_with_serviced_trips() {
    let mut episode = seeded_episode(quiet_config(), 8);
    for id in 0..6 {
        enqueue(&mut episode, id, Position::new(1.0, 1.0), 0);
    }
    let mut last = None;
    for step in 0..6 {
        last = Some(episode.step(&[], 4 * step));
    }
    let observation = last.expect("observation").observation;
    // Six trips of half an hour: 3 of 12 hours.
    assert!((observation.driver_fatigues[0] - 0.25).abs() < EPS);
    assert!(observation.driver_fatigues[1..].iter().all(|&f| f == 0.0));
}
