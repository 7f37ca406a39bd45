use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use market_core::MarketConfig;
use market_experiments::{export_history_to_csv, export_summaries_to_json, run_parallel_episodes};

#[derive(Parser)]
#[command(
    name = "run_day",
    about = "Run one or more simulated market days with a random incentive policy"
)]
struct Args {
    /// Seed of the first episode; later episodes use consecutive seeds
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Number of independent episodes
    #[arg(long, default_value_t = 1)]
    episodes: u64,
    /// JSON file with a (partial) market configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write per-step history to this CSV file
    #[arg(long)]
    history_csv: Option<PathBuf>,
    /// Write episode summaries to this JSON file
    #[arg(long)]
    summary_json: Option<PathBuf>,
    /// Worker threads (defaults to the number of cores)
    #[arg(long)]
    threads: Option<usize>,
}

fn load_config(path: Option<&PathBuf>) -> Result<MarketConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(MarketConfig::default());
    };
    let raw = fs::read_to_string(path)?;
    let config: MarketConfig = serde_json::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_ref())?;
    let seeds: Vec<u64> = (0..args.episodes).map(|i| args.seed.wrapping_add(i)).collect();
    log::info!(
        "running {} episode(s): grid {}x{}, {} drivers",
        seeds.len(),
        config.grid_size,
        config.grid_size,
        config.num_drivers
    );

    let runs = run_parallel_episodes(&config, &seeds, args.threads, seeds.len() > 1)?;

    println!("--- {} episode(s) ---", runs.len());
    for run in &runs {
        let s = &run.summary;
        println!(
            "seed={} reward={:.2} trips={} generated={} peak_demand={} mean_fatigue={:.3}",
            s.seed, s.cumulative_reward, s.serviced_trips, s.passengers_generated, s.peak_demand, s.mean_fatigue
        );
    }

    if let Some(path) = &args.history_csv {
        export_history_to_csv(&runs, path)?;
        println!("History written to {}", path.display());
    }
    if let Some(path) = &args.summary_json {
        let summaries: Vec<_> = runs.iter().map(|r| r.summary.clone()).collect();
        export_summaries_to_json(&summaries, path)?;
        println!("Summaries written to {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("run_day failed: {err}");
        exit(1);
    }
}
