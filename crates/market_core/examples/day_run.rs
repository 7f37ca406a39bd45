//! Run one seeded day with a rotating incentive script and print KPIs.
//!
//! Run with: cargo run -p market_core --example day_run

use market_core::test_helpers::scripted_actions;
use market_core::{Episode, MarketConfig};

fn main() {
    const SEED: u64 = 123;

    let config = MarketConfig::default();
    let actions = scripted_actions(288, config.num_zones(), config.num_drivers);
    let mut episode = match Episode::new(config) {
        Ok(episode) => episode,
        Err(err) => {
            eprintln!("invalid config: {err}");
            return;
        }
    };
    episode.reset(Some(SEED));

    let mut total_reward = 0.0;
    let mut steps = 0;
    for action in actions {
        let result = episode.step_action(action);
        total_reward += result.total_reward();
        steps += 1;
        if result.terminated {
            break;
        }
    }

    let telemetry = episode.telemetry();
    let observation = episode.observation();
    println!("--- Day run (seed {SEED}) ---");
    println!("Steps executed: {steps}");
    println!("Passengers generated: {}", telemetry.passengers_generated);
    println!("Serviced trips: {}", telemetry.serviced_trips.len());
    println!("Busy-driver no-ops: {}", telemetry.busy_driver_noops);
    println!("Empty-queue no-ops: {}", telemetry.empty_queue_noops);
    println!("Still pending at end of day: {}", observation.total_demand());
    println!("Total reward: {total_reward:.2}");
    println!("Mean fleet fatigue: {:.3}", observation.mean_fatigue());
    if let Some(wait) = telemetry.mean_wait_steps() {
        println!("Mean serviced wait: {wait:.2} steps ({:.1} min)", wait * 5.0);
    }

    println!("\nFirst serviced trips:");
    for record in telemetry.serviced_trips.iter().take(10) {
        println!(
            "  step={:>3} driver={:>2} passenger={:>4} wait={} distance={:.2} reward={:.2}",
            record.step,
            record.driver_id,
            record.passenger_id,
            record.wait_steps,
            record.trip_distance,
            record.total_reward
        );
    }
}
