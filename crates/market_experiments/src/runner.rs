//! Episode execution: one full day, or many independent days in parallel
//! using rayon.

use indicatif::{ProgressBar, ProgressStyle};
use market_core::clock::STEPS_PER_DAY;
use market_core::{ConfigError, Episode, MarketConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::history::{EpisodeHistory, EpisodeSummary};
use crate::policy::{EpisodePolicy, RandomPolicy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRun {
    pub seed: u64,
    pub history: EpisodeHistory,
    pub summary: EpisodeSummary,
}

/// Run one seeded day to termination, asking `policy` for every action.
pub fn run_episode<P: EpisodePolicy + ?Sized>(
    config: &MarketConfig,
    seed: u64,
    policy: &mut P,
) -> Result<EpisodeRun, ConfigError> {
    let mut episode = Episode::new(config.clone())?;
    let mut observation = episode.reset(Some(seed));
    let mut history = EpisodeHistory::default();

    for _ in 0..STEPS_PER_DAY {
        let result = episode.step_action(policy.act(&observation));
        history.record(&result);
        observation = result.observation;
        if result.terminated {
            break;
        }
    }

    let summary = EpisodeSummary::from_history(seed, &history, episode.telemetry());
    log::info!(
        "episode seed={} finished: reward {:.2}, {} trips, {} generated",
        seed,
        summary.cumulative_reward,
        summary.serviced_trips,
        summary.passengers_generated
    );
    Ok(EpisodeRun {
        seed,
        history,
        summary,
    })
}

/// Run one episode per seed in parallel, each driven by a [`RandomPolicy`]
/// seeded with the episode seed.
///
/// Results come back in the order of `seeds`.
pub fn run_parallel_episodes(
    config: &MarketConfig,
    seeds: &[u64],
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<EpisodeRun>, Box<dyn std::error::Error>> {
    run_parallel_episodes_with_policy(config, seeds, num_threads, show_progress, RandomPolicy::new)
}

/// Run one episode per seed in parallel with a policy built by `make_policy`.
///
/// Episodes share nothing: each owns its world and random stream.
pub fn run_parallel_episodes_with_policy<F, P>(
    config: &MarketConfig,
    seeds: &[u64],
    num_threads: Option<usize>,
    show_progress: bool,
    make_policy: F,
) -> Result<Vec<EpisodeRun>, Box<dyn std::error::Error>>
where
    F: Fn(u64) -> P + Sync,
    P: EpisodePolicy,
{
    config.validate()?;

    let total = seeds.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )?
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = num_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    let pb_clone = pb.clone();
    let runs: Result<Vec<EpisodeRun>, ConfigError> = pool.install(|| {
        seeds
            .par_iter()
            .map(|&seed| {
                let mut policy = make_policy(seed);
                let run = run_episode(config, seed, &mut policy);
                if let Some(ref progress_bar) = pb_clone {
                    progress_bar.inc(1);
                }
                run
            })
            .collect()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    Ok(runs?)
}
